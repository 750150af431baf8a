// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 stream cipher and the HSalsa20/XSalsa20 nonce extension.
//!
//! All sensitive state is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::consts::{
    HSALSA20_INPUT_SIZE, KEY_SIZE, SALSA20_BLOCK_SIZE, STATE_WORDS, STREAM_NONCE_SIZE,
};
use super::types::{BoxKey, BoxNonce};

/// State initialization constant ("expand 32-byte k")
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// One Salsa20 quarter-round over the fixed word positions `a, b, c, d`.
///
/// The rotation constants 7, 9, 13, 18 and the feedback order are part of
/// the cipher definition and must not change.
#[inline(always)]
fn quarter_round(state: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// The 20 Salsa20 rounds: 10 double-rounds alternating column and diagonal
/// quarter-rounds. The index sets encode the cipher's diffusion structure.
#[inline(always)]
fn do_rounds(state: &mut [u32; STATE_WORDS]) {
    for _ in 0..10 {
        // column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 5, 9, 13, 1);
        quarter_round(state, 10, 14, 2, 6);
        quarter_round(state, 15, 3, 7, 11);

        // diagonal rounds
        quarter_round(state, 0, 1, 2, 3);
        quarter_round(state, 5, 6, 7, 4);
        quarter_round(state, 10, 11, 8, 9);
        quarter_round(state, 15, 12, 13, 14);
    }
}

/// Salsa20 cipher state with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Salsa20 {
    initial: [u32; STATE_WORDS],
    working: [u32; STATE_WORDS],
    keystream: [u8; SALSA20_BLOCK_SIZE],
}

impl Default for Salsa20 {
    fn default() -> Self {
        Self {
            initial: [0; STATE_WORDS],
            working: [0; STATE_WORDS],
            keystream: [0; SALSA20_BLOCK_SIZE],
        }
    }
}

impl Salsa20 {
    /// Build the initial state: constants in words 0/5/10/15, key halves in
    /// words 1..5 and 11..15, stream nonce in words 6..8, block counter
    /// (64-bit little-endian) in words 8..10.
    #[inline(always)]
    fn init_state(&mut self, key: &BoxKey, nonce: &[u8; STREAM_NONCE_SIZE], counter: u64) {
        self.initial[0] = SIGMA[0];
        self.initial[5] = SIGMA[1];
        self.initial[10] = SIGMA[2];
        self.initial[15] = SIGMA[3];

        for i in 0..4 {
            self.initial[1 + i] = u32::from_le_bytes(
                key[i * 4..i * 4 + 4]
                    .try_into()
                    .expect("infallible: key chunk is exactly 4 bytes"),
            );
            self.initial[11 + i] = u32::from_le_bytes(
                key[16 + i * 4..16 + i * 4 + 4]
                    .try_into()
                    .expect("infallible: key chunk is exactly 4 bytes"),
            );
        }

        self.initial[6] = u32::from_le_bytes(
            nonce[0..4]
                .try_into()
                .expect("infallible: nonce chunk is exactly 4 bytes"),
        );
        self.initial[7] = u32::from_le_bytes(
            nonce[4..8]
                .try_into()
                .expect("infallible: nonce chunk is exactly 4 bytes"),
        );

        self.initial[8] = counter as u32;
        self.initial[9] = (counter >> 32) as u32;
    }

    /// Generate one keystream block into self.keystream
    #[inline(always)]
    fn generate_block(
        &mut self,
        key: &BoxKey,
        nonce: &[u8; STREAM_NONCE_SIZE],
        counter: u64,
    ) {
        self.init_state(key, nonce, counter);
        self.working.copy_from_slice(&self.initial);

        do_rounds(&mut self.working);

        for i in 0..STATE_WORDS {
            self.working[i] = self.working[i].wrapping_add(self.initial[i]);
            self.keystream[i * 4..i * 4 + 4].copy_from_slice(&self.working[i].to_le_bytes());
        }

        self.initial.zeroize();
    }

    #[cfg(test)]
    pub fn block(
        &mut self,
        key: &BoxKey,
        nonce: &[u8; STREAM_NONCE_SIZE],
        counter: u64,
        output: &mut [u8; SALSA20_BLOCK_SIZE],
    ) {
        self.generate_block(key, nonce, counter);
        output.copy_from_slice(&self.keystream);
        self.keystream.zeroize();
    }

    /// Encrypt/decrypt data in-place, starting at the given block counter.
    ///
    /// The final partial block truncates the XOR; the counter must not wrap
    /// within a single call, which a u64 rules out for any realistic length.
    #[inline(always)]
    pub fn crypt(
        &mut self,
        key: &BoxKey,
        nonce: &[u8; STREAM_NONCE_SIZE],
        counter: u64,
        data: &mut [u8],
    ) {
        for (i, chunk) in data.chunks_mut(SALSA20_BLOCK_SIZE).enumerate() {
            self.generate_block(key, nonce, counter.wrapping_add(i as u64));

            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        self.keystream.zeroize();
    }
}

impl core::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20 {{ [protected] }}")
    }
}

/// HSalsa20 state for subkey derivation.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct HSalsa20 {
    state: [u32; STATE_WORDS],
}

impl HSalsa20 {
    /// Derive a 32-byte subkey from a key and a 16-byte input block.
    ///
    /// Emits words [0, 5, 10, 15, 6, 7, 8, 9] of the permuted state: the
    /// reduced output defined for HSalsa20. It is pseudorandom under the key
    /// but must never be used as keystream.
    #[inline(always)]
    pub fn derive(
        &mut self,
        key: &BoxKey,
        input: &[u8; HSALSA20_INPUT_SIZE],
        output: &mut [u8; KEY_SIZE],
    ) {
        self.state[0] = SIGMA[0];
        self.state[5] = SIGMA[1];
        self.state[10] = SIGMA[2];
        self.state[15] = SIGMA[3];

        for i in 0..4 {
            self.state[1 + i] = u32::from_le_bytes(
                key[i * 4..i * 4 + 4]
                    .try_into()
                    .expect("infallible: key chunk is exactly 4 bytes"),
            );
            self.state[11 + i] = u32::from_le_bytes(
                key[16 + i * 4..16 + i * 4 + 4]
                    .try_into()
                    .expect("infallible: key chunk is exactly 4 bytes"),
            );
            self.state[6 + i] = u32::from_le_bytes(
                input[i * 4..i * 4 + 4]
                    .try_into()
                    .expect("infallible: input chunk is exactly 4 bytes"),
            );
        }

        do_rounds(&mut self.state);

        const OUTPUT_WORDS: [usize; 8] = [0, 5, 10, 15, 6, 7, 8, 9];

        for (i, &word) in OUTPUT_WORDS.iter().enumerate() {
            output[i * 4..i * 4 + 4].copy_from_slice(&self.state[word].to_le_bytes());
        }

        self.state.zeroize();
    }
}

impl core::fmt::Debug for HSalsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HSalsa20 {{ [protected] }}")
    }
}

/// XSalsa20 cipher state with guaranteed zeroization.
///
/// Extends the Salsa20 nonce from 8 to 24 bytes: the leading 16 nonce bytes
/// derive a per-message subkey through HSalsa20, the trailing 8 bytes become
/// the stream nonce for Salsa20 under that subkey.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct XSalsa20 {
    subkey: [u8; KEY_SIZE],
    hsalsa: HSalsa20,
    salsa: Salsa20,
}

impl XSalsa20 {
    /// Derive the one-time Poly1305 key: the first 32 bytes of keystream
    /// block 0. Seal produces the same bytes through its single keystream
    /// pass over the zero padding; open calls this to verify before
    /// decrypting.
    #[inline(always)]
    pub fn derive_onetime_key(
        &mut self,
        key: &BoxKey,
        nonce: &BoxNonce,
        output: &mut [u8; KEY_SIZE],
    ) {
        self.hsalsa.derive(
            key,
            nonce[0..HSALSA20_INPUT_SIZE]
                .try_into()
                .expect("infallible: nonce[0..16] is exactly 16 bytes"),
            &mut self.subkey,
        );

        let stream_nonce: &[u8; STREAM_NONCE_SIZE] = nonce[HSALSA20_INPUT_SIZE..]
            .try_into()
            .expect("infallible: nonce[16..24] is exactly 8 bytes");

        self.salsa.generate_block(&self.subkey, stream_nonce, 0);
        output.copy_from_slice(&self.salsa.keystream[0..KEY_SIZE]);

        self.subkey.zeroize();
        self.salsa.keystream.zeroize();
    }

    /// Encrypt/decrypt data in-place (counter=0)
    #[inline(always)]
    pub fn crypt(&mut self, key: &BoxKey, nonce: &BoxNonce, data: &mut [u8]) {
        self.hsalsa.derive(
            key,
            nonce[0..HSALSA20_INPUT_SIZE]
                .try_into()
                .expect("infallible: nonce[0..16] is exactly 16 bytes"),
            &mut self.subkey,
        );

        let stream_nonce: &[u8; STREAM_NONCE_SIZE] = nonce[HSALSA20_INPUT_SIZE..]
            .try_into()
            .expect("infallible: nonce[16..24] is exactly 8 bytes");

        self.salsa.crypt(&self.subkey, stream_nonce, 0, data);

        self.subkey.zeroize();
    }
}

impl core::fmt::Debug for XSalsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "XSalsa20 {{ [protected] }}")
    }
}
