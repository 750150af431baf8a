// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the parapet crates.
//!
//! Everything here is dependency-free and allocation-light; the only
//! allocating helper is [`hex_to_bytes`], which exists for test vectors.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// The comparison time is constant regardless of where differences occur,
/// preventing timing side-channel attacks.
///
/// # Example
///
/// ```
/// use parapet_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Splits a mutable slice at `mid`, returning `None` instead of panicking
/// when `mid` is out of bounds.
///
/// # Example
///
/// ```
/// use parapet_util::try_split_at_mut;
///
/// let mut data = [1u8, 2, 3, 4, 5];
/// let (left, right) = try_split_at_mut(&mut data, 2).unwrap();
/// assert_eq!(left, &[1, 2]);
/// assert_eq!(right, &[3, 4, 5]);
///
/// assert!(try_split_at_mut(&mut data, 6).is_none());
/// ```
#[inline]
pub fn try_split_at_mut<T>(slice: &mut [T], mid: usize) -> Option<(&mut [T], &mut [T])> {
    if mid > slice.len() {
        return None;
    }

    Some(slice.split_at_mut(mid))
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use parapet_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 8]));
/// assert!(!is_slice_zeroized(&[0, 0, 1, 0]));
/// ```
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use parapet_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}
