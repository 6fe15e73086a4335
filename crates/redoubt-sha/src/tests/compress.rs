// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::compress::{ChainingValue, compress};
use crate::pad::pad;
use crate::sha1::Sha1;
use crate::sha256::Sha256;
use crate::sha512::Sha512;
use crate::traits::Sha;

use super::unhex;

/// The single padded block of "abc" under `S`'s layout.
fn abc_block<S: Sha>() -> Vec<u8> {
    let blocks: Vec<_> = pad(*b"abc", S::layout(), 0)
        .map(|block| block.as_ref().to_vec())
        .collect();
    assert_eq!(blocks.len(), 1);
    blocks.into_iter().next().expect("one padded block")
}

#[test]
fn test_chaining_value_starts_at_h0() {
    assert_eq!(ChainingValue::<Sha1>::new().words(), Sha1::H0);
    assert_eq!(ChainingValue::<Sha256>::default().words(), Sha256::H0);
    assert_eq!(ChainingValue::<Sha512>::new().words(), Sha512::H0);
}

#[test]
fn test_sha256_single_block_words() {
    let mut h = Sha256::H0.to_vec();
    compress::<Sha256>(&mut h, &abc_block::<Sha256>());

    assert_eq!(
        h,
        [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    );
}

#[test]
fn test_sha1_single_block_words() {
    let mut h = Sha1::H0.to_vec();
    compress::<Sha1>(&mut h, &abc_block::<Sha1>());

    assert_eq!(h, [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
}

#[test]
fn test_sha512_single_block_bytes() {
    let mut state = ChainingValue::<Sha512>::new();
    state.compress(&abc_block::<Sha512>());

    assert_eq!(
        state.to_bytes(),
        unhex(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
}

#[test]
fn test_chaining_value_is_order_sensitive() {
    let a = [0x11u8; 64];
    let b = [0x22u8; 64];

    let mut ab = ChainingValue::<Sha256>::new();
    ab.compress(&a);
    ab.compress(&b);

    let mut ba = ChainingValue::<Sha256>::new();
    ba.compress(&b);
    ba.compress(&a);

    assert_ne!(ab, ba);
    assert_ne!(ab.words(), Sha256::H0);
}

#[test]
fn test_all_zero_block_changes_state() {
    let mut state = ChainingValue::<Sha1>::new();
    state.compress(&[0u8; 64]);

    assert_ne!(state.words(), Sha1::H0);
}

#[test]
#[should_panic(expected = "SHA-256 block must be 64 bytes")]
fn test_short_block_panics() {
    let mut h = Sha256::H0.to_vec();
    compress::<Sha256>(&mut h, &[0u8; 63]);
}

#[test]
#[should_panic(expected = "SHA-512 block must be 128 bytes")]
fn test_sha256_sized_block_for_sha512_panics() {
    let mut h = Sha512::H0.to_vec();
    compress::<Sha512>(&mut h, &[0u8; 64]);
}

#[test]
#[should_panic(expected = "SHA-1 chaining value must be 5 words")]
fn test_wrong_chaining_value_length_panics() {
    let mut h = vec![0u32; 8];
    compress::<Sha1>(&mut h, &[0u8; 64]);
}
