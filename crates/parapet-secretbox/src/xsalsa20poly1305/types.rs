// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for secretbox.

use super::consts::{KEY_SIZE, NONCE_SIZE};

/// Secretbox key type
pub type BoxKey = [u8; KEY_SIZE];

/// XSalsa20 extended nonce type
pub type BoxNonce = [u8; NONCE_SIZE];
