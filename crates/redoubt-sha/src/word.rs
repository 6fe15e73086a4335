// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word primitives per RFC 6234 Section 5 (FIPS 180-4 Section 4.1).
//!
//! Every function is written once against [`Word`] and instantiated for
//! `u32` (SHA-1, SHA-256) and `u64` (SHA-512). Arithmetic wraps modulo 2^w.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Fixed-width unsigned machine word used by the compression rounds.
pub trait Word:
    Copy
    + Debug
    + Default
    + Eq
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits (`w`)
    const BITS: u32;
    /// Width in bytes
    const BYTES: usize;
    /// The all-zero word
    const ZERO: Self;

    /// Addition modulo 2^w
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Reads a word from exactly [`Word::BYTES`] big-endian bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Writes the word into exactly [`Word::BYTES`] bytes, big-endian.
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                <$ty>::from_be_bytes(buf)
            }

            #[inline(always)]
            fn write_be(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// ROTL^n(x) = (x << n) | (x >> w-n), for 0 < n < w
#[inline(always)]
pub fn rotl<W: Word>(x: W, n: u32) -> W {
    assert!(
        n > 0 && n < W::BITS,
        "rotation by {n} outside 0 < n < {}",
        W::BITS
    );
    (x << n) | (x >> (W::BITS - n))
}

/// ROTR^n(x) = ROTL^(w-n)(x)
#[inline(always)]
pub fn rotr<W: Word>(x: W, n: u32) -> W {
    assert!(
        n > 0 && n < W::BITS,
        "rotation by {n} outside 0 < n < {}",
        W::BITS
    );
    rotl(x, W::BITS - n)
}

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
#[inline(always)]
pub fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
#[inline(always)]
pub fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Parity(x,y,z) = x ⊕ y ⊕ z (SHA-1 rounds 20..39 and 60..79)
#[inline(always)]
pub fn parity<W: Word>(x: W, y: W, z: W) -> W {
    x ^ y ^ z
}

/// Σ(x) = ROTR^n1(x) ⊕ ROTR^n2(x) ⊕ ROTR^n3(x), applied to state words.
#[inline(always)]
pub fn big_sigma<W: Word>(x: W, [n1, n2, n3]: [u32; 3]) -> W {
    rotr(x, n1) ^ rotr(x, n2) ^ rotr(x, n3)
}

/// σ(x) = ROTR^n1(x) ⊕ ROTR^n2(x) ⊕ SHR^n3(x), applied to schedule words.
///
/// The third term is a logical shift, not a rotation.
#[inline(always)]
pub fn small_sigma<W: Word>(x: W, [n1, n2, n3]: [u32; 3]) -> W {
    rotr(x, n1) ^ rotr(x, n2) ^ (x >> n3)
}
