// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub mod xsalsa20poly1305;

mod error;

pub use error::SecretboxError;
pub use xsalsa20poly1305::Secretbox;
