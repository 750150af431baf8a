// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod tests;

mod poly1305;
mod salsa20;
mod secretbox;
mod types;

pub(crate) mod consts;

pub use consts::{KEY_SIZE, NONCE_SIZE, PAD_SIZE, RESERVED_ZERO_SIZE, TAG_SIZE};
pub use secretbox::Secretbox;
pub use types::{BoxKey, BoxNonce};

// Re-export from crate root
pub use crate::SecretboxError;
