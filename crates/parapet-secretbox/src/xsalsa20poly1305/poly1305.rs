// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator.
//!
//! Arithmetic modulo 2^130-5 over five 26-bit limbs with 64-bit products.
//! The one-time key must authenticate exactly one message; secretbox
//! guarantees this by deriving a fresh key per message from the keystream.
//! All sensitive state is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::consts::{BLOCK_SIZE, KEY_SIZE, TAG_SIZE};

const LIMB_MASK: u64 = 0x3ffffff;

/// Poly1305 authenticator state.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305 {
    r: [u32; 5],
    s: [u32; 4],
    acc: [u64; 5],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
}

impl Poly1305 {
    /// Load a one-time key: clamp the multiplier `r` per the required bit
    /// masks and keep `s` as the final 128-bit additive mask.
    pub fn init(&mut self, key: &[u8; KEY_SIZE]) {
        self.acc = [0; 5];
        self.buffer_len = 0;

        // r in 26-bit limbs, clamp folded into the loads: the top four bits
        // of bytes 3/7/11/15 and the low two bits of bytes 4/8/12 are
        // forced clear.
        let t0 = u32::from_le_bytes(
            key[0..4]
                .try_into()
                .expect("infallible: key chunk is exactly 4 bytes"),
        );
        let t1 = u32::from_le_bytes(
            key[3..7]
                .try_into()
                .expect("infallible: key chunk is exactly 4 bytes"),
        );
        let t2 = u32::from_le_bytes(
            key[6..10]
                .try_into()
                .expect("infallible: key chunk is exactly 4 bytes"),
        );
        let t3 = u32::from_le_bytes(
            key[9..13]
                .try_into()
                .expect("infallible: key chunk is exactly 4 bytes"),
        );
        let t4 = u32::from_le_bytes(
            key[12..16]
                .try_into()
                .expect("infallible: key chunk is exactly 4 bytes"),
        );

        self.r[0] = t0 & 0x3ffffff;
        self.r[1] = (t1 >> 2) & 0x3ffff03;
        self.r[2] = (t2 >> 4) & 0x3ffc0ff;
        self.r[3] = (t3 >> 6) & 0x3f03fff;
        self.r[4] = (t4 >> 8) & 0x00fffff;

        for i in 0..4 {
            self.s[i] = u32::from_le_bytes(
                key[16 + i * 4..16 + i * 4 + 4]
                    .try_into()
                    .expect("infallible: key chunk is exactly 4 bytes"),
            );
        }
    }

    /// Add one 16-byte block into the accumulator, multiply by `r` and
    /// reduce. `hibit` is the 2^128 block-top bit: set for full message
    /// blocks, clear for the padded final block (whose 0x01 marker already
    /// sits in the block bytes).
    fn process_block(&mut self, block: &[u8; BLOCK_SIZE], hibit: u32) {
        let t0 = u32::from_le_bytes(
            block[0..4]
                .try_into()
                .expect("infallible: block chunk is exactly 4 bytes"),
        );
        let t1 = u32::from_le_bytes(
            block[4..8]
                .try_into()
                .expect("infallible: block chunk is exactly 4 bytes"),
        );
        let t2 = u32::from_le_bytes(
            block[8..12]
                .try_into()
                .expect("infallible: block chunk is exactly 4 bytes"),
        );
        let t3 = u32::from_le_bytes(
            block[12..16]
                .try_into()
                .expect("infallible: block chunk is exactly 4 bytes"),
        );

        self.acc[0] += (t0 & 0x3ffffff) as u64;
        self.acc[1] += (((t0 >> 26) | (t1 << 6)) & 0x3ffffff) as u64;
        self.acc[2] += (((t1 >> 20) | (t2 << 12)) & 0x3ffffff) as u64;
        self.acc[3] += (((t2 >> 14) | (t3 << 18)) & 0x3ffffff) as u64;
        self.acc[4] += ((t3 >> 8) | (hibit << 24)) as u64;

        let r0 = self.r[0] as u64;
        let r1 = self.r[1] as u64;
        let r2 = self.r[2] as u64;
        let r3 = self.r[3] as u64;
        let r4 = self.r[4] as u64;

        // Products of the limbs above position 130 wrap around through the
        // factor 5 (2^130 = 5 mod 2^130-5).
        let d0 = self.acc[0] * r0
            + self.acc[1] * (5 * r4)
            + self.acc[2] * (5 * r3)
            + self.acc[3] * (5 * r2)
            + self.acc[4] * (5 * r1);
        let d1 = self.acc[0] * r1
            + self.acc[1] * r0
            + self.acc[2] * (5 * r4)
            + self.acc[3] * (5 * r3)
            + self.acc[4] * (5 * r2);
        let d2 = self.acc[0] * r2
            + self.acc[1] * r1
            + self.acc[2] * r0
            + self.acc[3] * (5 * r4)
            + self.acc[4] * (5 * r3);
        let d3 = self.acc[0] * r3
            + self.acc[1] * r2
            + self.acc[2] * r1
            + self.acc[3] * r0
            + self.acc[4] * (5 * r4);
        let d4 = self.acc[0] * r4
            + self.acc[1] * r3
            + self.acc[2] * r2
            + self.acc[3] * r1
            + self.acc[4] * r0;

        let mut c;
        let mut d = [d0, d1, d2, d3, d4];

        c = d[0] >> 26;
        d[0] &= LIMB_MASK;
        d[1] += c;
        c = d[1] >> 26;
        d[1] &= LIMB_MASK;
        d[2] += c;
        c = d[2] >> 26;
        d[2] &= LIMB_MASK;
        d[3] += c;
        c = d[3] >> 26;
        d[3] &= LIMB_MASK;
        d[4] += c;
        c = d[4] >> 26;
        d[4] &= LIMB_MASK;
        d[0] += c * 5;
        c = d[0] >> 26;
        d[0] &= LIMB_MASK;
        d[1] += c;

        self.acc = d;

        d.zeroize();
    }

    /// Absorb message bytes, buffering partial blocks between calls.
    pub fn update(&mut self, data: &[u8]) {
        let mut pos = 0;

        if self.buffer_len > 0 {
            let need = BLOCK_SIZE - self.buffer_len;
            let take = core::cmp::min(need, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            pos = take;

            if self.buffer_len == BLOCK_SIZE {
                let mut block = self.buffer;
                self.process_block(&block, 1);
                block.zeroize();
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        while pos + BLOCK_SIZE <= data.len() {
            self.process_block(
                data[pos..pos + BLOCK_SIZE]
                    .try_into()
                    .expect("infallible: block is exactly 16 bytes"),
                1,
            );
            pos += BLOCK_SIZE;
        }

        if pos < data.len() {
            let remaining = data.len() - pos;
            self.buffer[..remaining].copy_from_slice(&data[pos..]);
            self.buffer_len = remaining;
        }
    }

    /// Process the trailing short block, apply the branch-free final
    /// reduction modulo 2^130-5, add `s` and write the 16-byte tag.
    pub fn finalize(&mut self, output: &mut [u8; TAG_SIZE]) {
        if self.buffer_len > 0 {
            let mut block = [0u8; BLOCK_SIZE];
            block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
            block[self.buffer_len] = 0x01;
            self.process_block(&block, 0);
            block.zeroize();
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        let mut h = self.acc;

        // Full carry propagation
        let mut c;
        c = h[1] >> 26;
        h[1] &= LIMB_MASK;
        h[2] += c;
        c = h[2] >> 26;
        h[2] &= LIMB_MASK;
        h[3] += c;
        c = h[3] >> 26;
        h[3] &= LIMB_MASK;
        h[4] += c;
        c = h[4] >> 26;
        h[4] &= LIMB_MASK;
        h[0] += c * 5;
        c = h[0] >> 26;
        h[0] &= LIMB_MASK;
        h[1] += c;

        // Compute h + 5; carrying the top limb past bit 26 means
        // h >= 2^130-5, in which case g = h - (2^130-5) is the residue.
        let mut g = [0u64; 5];
        g[0] = h[0] + 5;
        c = g[0] >> 26;
        g[0] &= LIMB_MASK;
        g[1] = h[1] + c;
        c = g[1] >> 26;
        g[1] &= LIMB_MASK;
        g[2] = h[2] + c;
        c = g[2] >> 26;
        g[2] &= LIMB_MASK;
        g[3] = h[3] + c;
        c = g[3] >> 26;
        g[3] &= LIMB_MASK;
        g[4] = h[4] + c;

        // mask = all 1s if no overflow (keep h), all 0s if overflow (take g).
        // No branches: the selection must not leak which case occurred.
        let mask = (g[4] >> 26).wrapping_sub(1);

        h[0] = (h[0] & mask) | (g[0] & !mask);
        h[1] = (h[1] & mask) | (g[1] & !mask);
        h[2] = (h[2] & mask) | (g[2] & !mask);
        h[3] = (h[3] & mask) | (g[3] & !mask);
        // g has no residue in the top limb; zero it when g is selected
        h[4] &= mask;

        // Convert radix 2^26 to four 32-bit words
        let w0 = h[0] | ((h[1] & 0x3f) << 26);
        let w1 = (h[1] >> 6) | ((h[2] & 0xfff) << 20);
        let w2 = (h[2] >> 12) | ((h[3] & 0x3ffff) << 14);
        let w3 = (h[3] >> 18) | ((h[4] & 0xffffff) << 8);

        // tag = (h + s) mod 2^128, carried through 64-bit intermediates
        let mut f;
        f = w0 + self.s[0] as u64;
        output[0..4].copy_from_slice(&(f as u32).to_le_bytes());
        f = w1 + self.s[1] as u64 + (f >> 32);
        output[4..8].copy_from_slice(&(f as u32).to_le_bytes());
        f = w2 + self.s[2] as u64 + (f >> 32);
        output[8..12].copy_from_slice(&(f as u32).to_le_bytes());
        f = w3 + self.s[3] as u64 + (f >> 32);
        output[12..16].copy_from_slice(&(f as u32).to_le_bytes());

        h.zeroize();
        g.zeroize();

        // The one-time key is spent; discard it with the accumulator.
        self.acc.zeroize();
        self.r.zeroize();
        self.s.zeroize();
    }

    #[cfg(test)]
    pub fn compute(key: &[u8; KEY_SIZE], data: &[u8], output: &mut [u8; TAG_SIZE]) {
        let mut state = Self::default();
        state.init(key);
        state.update(data);
        state.finalize(output);
        state.zeroize();
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}
