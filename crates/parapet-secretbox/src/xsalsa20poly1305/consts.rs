// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for XSalsa20 and Poly1305.

/// Secret key size in bytes
pub const KEY_SIZE: usize = 32;

/// Extended nonce size in bytes (XSalsa20)
pub const NONCE_SIZE: usize = 24;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Poly1305 block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Salsa20 keystream block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Salsa20 stream nonce size in bytes (trailing 8 bytes of the extended nonce)
pub const STREAM_NONCE_SIZE: usize = 8;

/// HSalsa20 input block size in bytes (leading 16 bytes of the extended nonce)
pub const HSALSA20_INPUT_SIZE: usize = 16;

/// Number of 32-bit words in the Salsa20 state
pub const STATE_WORDS: usize = 16;

/// Leading reserved region of a padded buffer, in bytes.
///
/// A plaintext buffer must carry this many zero bytes before the message;
/// a sealed buffer holds the reserved-zero prefix and the tag here.
pub const PAD_SIZE: usize = 32;

/// Always-zero prefix of a sealed buffer, in bytes
pub const RESERVED_ZERO_SIZE: usize = 16;
