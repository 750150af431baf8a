// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XSalsa20-Poly1305 secretbox: seal and open over a zero-padded buffer.
//!
//! Both operations transform a single caller-owned buffer in place, which is
//! how the "output may alias input" contract is rendered here. Layout:
//!
//! ```text
//! plaintext buffer:  [ 32 zero bytes                ][ message ... ]
//! sealed buffer:     [ 16 zero bytes ][ 16-byte tag ][ ciphertext ... ]
//! ```
//!
//! The zero padding lets one keystream pass produce both the one-time
//! Poly1305 key (bytes [0, 32) of the XORed buffer) and the ciphertext.
//! All sensitive state is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use parapet_util::{constant_time_eq, try_split_at_mut};

use super::consts::{KEY_SIZE, PAD_SIZE, RESERVED_ZERO_SIZE, TAG_SIZE};
use super::poly1305::Poly1305;
use super::salsa20::XSalsa20;
use super::types::{BoxKey, BoxNonce};
use crate::SecretboxError;

/// XSalsa20-Poly1305 secretbox with guaranteed zeroization.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Secretbox {
    xsalsa: XSalsa20,
    poly: Poly1305,
    poly_key: [u8; KEY_SIZE],
    expected_tag: [u8; TAG_SIZE],
}

impl Secretbox {
    fn compute_tag(&mut self, ciphertext: &[u8]) {
        self.poly.init(&self.poly_key);
        self.poly.update(ciphertext);
        self.poly.finalize(&mut self.expected_tag);
    }

    /// Seal a padded plaintext buffer in place.
    ///
    /// The caller must supply `buffer` with its first 32 bytes zero and the
    /// message starting at offset 32. On success the buffer holds 16 zero
    /// bytes, the 16-byte tag, then the ciphertext; its length is unchanged.
    ///
    /// Fails with [`SecretboxError::BufferTooShort`] before any
    /// cryptographic work if the buffer cannot hold the reserved region;
    /// the buffer is left untouched in that case.
    pub fn seal(
        &mut self,
        key: &BoxKey,
        nonce: &BoxNonce,
        buffer: &mut [u8],
    ) -> Result<(), SecretboxError> {
        if buffer.len() < PAD_SIZE {
            return Err(SecretboxError::BufferTooShort);
        }

        // One keystream pass over the whole padded buffer. XORing the zero
        // padding leaves raw keystream in bytes [0, 32): the one-time
        // Poly1305 key for this message.
        self.xsalsa.crypt(key, nonce, buffer);

        let (head, ciphertext) = buffer.split_at_mut(PAD_SIZE);
        self.poly_key.copy_from_slice(head);
        self.compute_tag(ciphertext);

        head[..RESERVED_ZERO_SIZE].fill(0);
        head[RESERVED_ZERO_SIZE..].copy_from_slice(&self.expected_tag);

        self.poly_key.zeroize();
        self.expected_tag.zeroize();

        Ok(())
    }

    /// Open a sealed buffer in place.
    ///
    /// Verifies the tag in constant time before any plaintext is produced.
    /// On success the buffer holds 32 zero bytes followed by the message.
    ///
    /// Fails with [`SecretboxError::BufferTooShort`] before any
    /// cryptographic work (buffer untouched), or with
    /// [`SecretboxError::AuthenticationFailed`] on tag mismatch, in which
    /// case the entire buffer is zeroized: no unauthenticated bytes survive.
    pub fn open(
        &mut self,
        key: &BoxKey,
        nonce: &BoxNonce,
        buffer: &mut [u8],
    ) -> Result<(), SecretboxError> {
        let Some((head, ciphertext)) = try_split_at_mut(buffer, PAD_SIZE) else {
            return Err(SecretboxError::BufferTooShort);
        };

        // Recover the one-time Poly1305 key from keystream block 0 and
        // recompute the tag over the ciphertext.
        self.xsalsa.derive_onetime_key(key, nonce, &mut self.poly_key);
        self.compute_tag(ciphertext);

        let tag_ok = constant_time_eq(&self.expected_tag, &head[RESERVED_ZERO_SIZE..]);

        self.poly_key.zeroize();
        self.expected_tag.zeroize();

        if !tag_ok {
            // Fail closed: nothing in the buffer may be mistaken for
            // authenticated plaintext.
            buffer.zeroize();
            return Err(SecretboxError::AuthenticationFailed);
        }

        // Same keystream pass as seal; bytes [0, 32) become garbage and are
        // cleared back to the zero padding.
        self.xsalsa.crypt(key, nonce, buffer);
        buffer[..PAD_SIZE].fill(0);

        Ok(())
    }
}

impl core::fmt::Debug for Secretbox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Secretbox {{ [protected] }}")
    }
}
