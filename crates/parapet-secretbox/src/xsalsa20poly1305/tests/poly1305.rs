// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 tests: RFC 8439 Section 2.5.2 and the NaCl onetimeauth vector.

use parapet_util::hex_to_bytes;

use crate::xsalsa20poly1305::poly1305::Poly1305;

fn hex_to_bytes_32(hex: &str) -> [u8; 32] {
    hex_to_bytes(hex).try_into().unwrap()
}

/// RFC 8439 Section 2.5.2 test vector
#[test]
fn test_rfc8439_section_2_5_2() {
    let key: [u8; 32] = [
        0x85, 0xd6, 0xbe, 0x78, 0x57, 0x55, 0x6d, 0x33, 0x7f, 0x44, 0x52, 0xfe, 0x42, 0xd5, 0x06,
        0xa8, 0x01, 0x03, 0x80, 0x8a, 0xfb, 0x0d, 0xb2, 0xfd, 0x4a, 0xbf, 0xf6, 0xaf, 0x41, 0x49,
        0xf5, 0x1b,
    ];
    let message = b"Cryptographic Forum Research Group";

    // Tag: a8:06:1d:c1:30:51:36:c6:c2:2b:8b:af:0c:01:27:a9
    let expected: [u8; 16] = [
        0xa8, 0x06, 0x1d, 0xc1, 0x30, 0x51, 0x36, 0xc6, 0xc2, 0x2b, 0x8b, 0xaf, 0x0c, 0x01, 0x27,
        0xa9,
    ];

    let mut tag = [0u8; 16];
    Poly1305::compute(&key, message, &mut tag);

    assert_eq!(tag, expected, "Tag doesn't match RFC 8439");
}

/// NaCl onetimeauth test vector: the one-time key and message are the
/// keystream head and ciphertext of the classic secretbox vector.
#[test]
fn test_nacl_onetimeauth_vector() {
    let key = hex_to_bytes_32("eea6a7251c1e72916d11c2cb214d3c252539121d8e234e652d651fa4c8cff880");
    let message = hex_to_bytes(concat!(
        "8e993b9f48681273c29650ba32fc76ce48332ea7164d96a4476fb8c531a1186a",
        "c0dfc17c98dce87b4da7f011ec48c97271d2c20f9b928fe2270d6fb863d51738",
        "b48eeee314a7cc8ab932164548e526ae90224368517acfeabd6bb3732bc0e9da",
        "99832b61ca01b6de56244a9e88d5f9b37973f622a43d14a6599b1f654cb45a74",
        "e355a5",
    ));
    let expected: [u8; 16] = hex_to_bytes("f3ffc7703f9400e52a7dfb4b3d3305d9")
        .try_into()
        .unwrap();

    let mut tag = [0u8; 16];
    Poly1305::compute(&key, &message, &mut tag);

    assert_eq!(tag, expected);
}

/// With an empty message the tag is just s, the second half of the key.
#[test]
fn test_empty_message() {
    let key: [u8; 32] = [
        0x85, 0xd6, 0xbe, 0x78, 0x57, 0x55, 0x6d, 0x33, 0x7f, 0x44, 0x52, 0xfe, 0x42, 0xd5, 0x06,
        0xa8, 0x01, 0x03, 0x80, 0x8a, 0xfb, 0x0d, 0xb2, 0xfd, 0x4a, 0xbf, 0xf6, 0xaf, 0x41, 0x49,
        0xf5, 0x1b,
    ];

    let mut tag = [0u8; 16];
    Poly1305::compute(&key, b"", &mut tag);

    assert_eq!(&tag, &key[16..32]);
}

/// Test single full block (exactly 16 bytes)
#[test]
fn test_single_full_block() {
    let key: [u8; 32] = [
        0x85, 0xd6, 0xbe, 0x78, 0x57, 0x55, 0x6d, 0x33, 0x7f, 0x44, 0x52, 0xfe, 0x42, 0xd5, 0x06,
        0xa8, 0x01, 0x03, 0x80, 0x8a, 0xfb, 0x0d, 0xb2, 0xfd, 0x4a, 0xbf, 0xf6, 0xaf, 0x41, 0x49,
        0xf5, 0x1b,
    ];
    let message = b"0123456789abcdef"; // exactly 16 bytes

    let mut tag = [0u8; 16];
    Poly1305::compute(&key, message, &mut tag);

    assert_eq!(tag.len(), 16);
}

/// Streaming updates must produce the same tag as a one-shot computation,
/// regardless of how the message is split.
#[test]
fn test_streaming_matches_oneshot() {
    let key: [u8; 32] = [
        0x85, 0xd6, 0xbe, 0x78, 0x57, 0x55, 0x6d, 0x33, 0x7f, 0x44, 0x52, 0xfe, 0x42, 0xd5, 0x06,
        0xa8, 0x01, 0x03, 0x80, 0x8a, 0xfb, 0x0d, 0xb2, 0xfd, 0x4a, 0xbf, 0xf6, 0xaf, 0x41, 0x49,
        0xf5, 0x1b,
    ];
    let message: Vec<u8> = (0..100).map(|i| i as u8).collect();

    let mut oneshot_tag = [0u8; 16];
    Poly1305::compute(&key, &message, &mut oneshot_tag);

    for split in [1, 7, 15, 16, 17, 50, 99] {
        let mut tag = [0u8; 16];
        let mut state = Poly1305::default();
        state.init(&key);
        state.update(&message[..split]);
        state.update(&message[split..]);
        state.finalize(&mut tag);

        assert_eq!(tag, oneshot_tag, "split at {} diverged", split);
    }
}

/// An all-ones key exercises the clamp and the carry chain.
#[test]
fn test_saturated_key_determinism() {
    let key = [0xffu8; 32];
    let message = [0xffu8; 48];

    let mut tag_a = [0u8; 16];
    let mut tag_b = [0u8; 16];
    Poly1305::compute(&key, &message, &mut tag_a);
    Poly1305::compute(&key, &message, &mut tag_b);

    assert_eq!(tag_a, tag_b);
}

#[test]
fn test_poly1305_debug_fmt() {
    let mac = Poly1305::default();
    let debug_str = format!("{:?}", mac);

    assert!(
        debug_str.contains("Poly1305"),
        "Expected 'Poly1305' in debug output"
    );
    assert!(
        debug_str.contains("[protected]"),
        "Expected '[protected]' to hide sensitive data"
    );
}
