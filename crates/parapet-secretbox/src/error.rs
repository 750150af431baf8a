// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secretbox error types.

use crate::xsalsa20poly1305::consts::PAD_SIZE;

/// Errors that can occur during seal or open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SecretboxError {
    #[error("buffer too short: expected at least {PAD_SIZE} bytes")]
    BufferTooShort,

    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}
