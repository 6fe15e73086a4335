// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Schedule and round shared by SHA-256 and SHA-512 (RFC 6234 Section 6.2.2
//! and 6.4.2). The two differ only in word width, rotation amounts and
//! constants, so both are driven from a [`Sha2Mixing`] table.

use crate::word::{Word, big_sigma, ch, maj, small_sigma};

/// Rotation and shift amounts of the four SHA-2 mixing functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sha2Mixing {
    /// Σ0, applied to working variable a
    pub bsig0: [u32; 3],
    /// Σ1, applied to working variable e
    pub bsig1: [u32; 3],
    /// σ0, applied to W[t-15]
    pub ssig0: [u32; 3],
    /// σ1, applied to W[t-2]
    pub ssig1: [u32; 3],
}

/// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
#[inline(always)]
pub(crate) fn expand<W: Word>(w: &[W], t: usize, mixing: &Sha2Mixing) -> W {
    small_sigma(w[t - 2], mixing.ssig1)
        .wrapping_add(w[t - 7])
        .wrapping_add(small_sigma(w[t - 15], mixing.ssig0))
        .wrapping_add(w[t - 16])
}

#[inline(always)]
pub(crate) fn round<W: Word>(v: &mut [W], k: W, w: W, mixing: &Sha2Mixing) {
    // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
    let t1 = v[7]
        .wrapping_add(big_sigma(v[4], mixing.bsig1))
        .wrapping_add(ch(v[4], v[5], v[6]))
        .wrapping_add(k)
        .wrapping_add(w);

    // T2 = Σ0(a) + Maj(a,b,c)
    let t2 = big_sigma(v[0], mixing.bsig0).wrapping_add(maj(v[0], v[1], v[2]));

    // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
    v.copy_within(0..7, 1);
    v[4] = v[4].wrapping_add(t1);
    v[0] = t1.wrapping_add(t2);
}
