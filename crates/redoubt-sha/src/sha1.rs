// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 parameter set per RFC 6234 Sections 5.1 and 6.1

use crate::algorithm::Algorithm;
use crate::consts::SHA1_BLOCK_LEN;
use crate::pad::LengthField;
use crate::traits::Sha;
use crate::word::{ch, maj, parity, rotl};

const ROUNDS: usize = 80;

/// Initial hash values H(0) per RFC 6234 Section 6.1.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 constants K per RFC 6234 Section 5.1, one per 20-round stage
const K1: [u32; ROUNDS] = {
    let mut k = [0u32; ROUNDS];
    let mut t = 0;
    while t < ROUNDS {
        k[t] = match t / 20 {
            0 => 0x5a827999,
            1 => 0x6ed9eba1,
            2 => 0x8f1bbcdc,
            _ => 0xca62c1d6,
        };
        t += 1;
    }
    k
};

/// SHA-1 (FIPS 180-4 Section 6.1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sha1;

/// Mixing function f_t: Ch for rounds 0..19, Maj for 40..59, Parity otherwise
#[inline(always)]
fn f(t: usize) -> fn(u32, u32, u32) -> u32 {
    match t / 20 {
        0 => ch,
        2 => maj,
        _ => parity,
    }
}

impl Sha for Sha1 {
    type Word = u32;

    const ALGORITHM: Algorithm = Algorithm::Sha1;
    const BLOCK_LEN: usize = SHA1_BLOCK_LEN;
    const LENGTH_FIELD: LengthField = LengthField::Bits64;
    const ROUNDS: usize = ROUNDS;
    const H0: &'static [u32] = &H0;
    const K: &'static [u32] = &K1;

    /// W[t] = ROTL^1(W[t-3] ⊕ W[t-8] ⊕ W[t-14] ⊕ W[t-16])
    #[inline(always)]
    fn expand(w: &[u32], t: usize) -> u32 {
        rotl(w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16], 1)
    }

    #[inline(always)]
    fn round(v: &mut [u32], t: usize, k: u32, w: u32) {
        // TEMP = ROTL^5(A) + f(t;B,C,D) + E + K(t) + W(t)
        let temp = rotl(v[0], 5)
            .wrapping_add(f(t)(v[1], v[2], v[3]))
            .wrapping_add(v[4])
            .wrapping_add(k)
            .wrapping_add(w);

        v[4] = v[3];
        v[3] = v[2];
        v[2] = rotl(v[1], 30);
        v[1] = v[0];
        v[0] = temp;
    }
}
