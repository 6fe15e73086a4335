// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block compression per RFC 6234 Sections 6.1.2, 6.2.2 and 6.4.2,
//! written once over the [`Sha`] parameter set.

use std::marker::PhantomData;

use crate::convert::{load_words, words_to_bytes};
use crate::traits::Sha;
use crate::word::Word;

/// Longest message schedule of any supported algorithm (SHA-1, SHA-512)
const MAX_ROUNDS: usize = 80;

/// Largest chaining value of any supported algorithm (SHA-256, SHA-512)
const MAX_STATE_WORDS: usize = 8;

/// Folds one block into the chaining value `h`.
///
/// # Panics
///
/// Panics if `block` is not exactly `S::BLOCK_LEN` bytes or `h` does not hold
/// `S::H0.len()` words.
pub fn compress<S: Sha>(h: &mut [S::Word], block: &[u8]) {
    assert_eq!(
        block.len(),
        S::BLOCK_LEN,
        "{} block must be {} bytes",
        S::ALGORITHM,
        S::BLOCK_LEN
    );
    assert_eq!(
        h.len(),
        S::H0.len(),
        "{} chaining value must be {} words",
        S::ALGORITHM,
        S::H0.len()
    );

    // Step 1: message schedule W[0..ROUNDS]
    let mut schedule = [<S::Word as Word>::ZERO; MAX_ROUNDS];
    let w = &mut schedule[..S::ROUNDS];
    let direct = S::BLOCK_LEN / <S::Word as Word>::BYTES;
    load_words(block, &mut w[..direct]);
    for t in direct..S::ROUNDS {
        let next = S::expand(w, t);
        w[t] = next;
    }

    // Step 2: working variables from H(i-1)
    let mut vars = [<S::Word as Word>::ZERO; MAX_STATE_WORDS];
    let v = &mut vars[..h.len()];
    v.copy_from_slice(h);

    // Step 3: rounds
    for (t, (k, wt)) in S::K.iter().zip(w.iter()).enumerate() {
        S::round(v, t, *k, *wt);
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (hi, vi) in h.iter_mut().zip(v.iter()) {
        *hi = hi.wrapping_add(*vi);
    }
}

/// Running hash state H(i) of one computation.
///
/// Starts at `S::H0` and changes only through [`ChainingValue::compress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainingValue<S: Sha> {
    words: [S::Word; MAX_STATE_WORDS],
    _algorithm: PhantomData<S>,
}

impl<S: Sha> ChainingValue<S> {
    /// Initial chaining value H(0).
    pub fn new() -> Self {
        let mut words = [<S::Word as Word>::ZERO; MAX_STATE_WORDS];
        words[..S::H0.len()].copy_from_slice(S::H0);

        Self {
            words,
            _algorithm: PhantomData,
        }
    }

    /// Folds one `S::BLOCK_LEN`-byte block in.
    pub fn compress(&mut self, block: &[u8]) {
        compress::<S>(&mut self.words[..S::H0.len()], block);
    }

    /// Current chaining words.
    pub fn words(&self) -> &[S::Word] {
        &self.words[..S::H0.len()]
    }

    /// Big-endian rendering of the chaining value, i.e. the digest once the
    /// padded message has been folded in.
    pub fn to_bytes(&self) -> Vec<u8> {
        words_to_bytes(self.words())
    }
}

impl<S: Sha> Default for ChainingValue<S> {
    fn default() -> Self {
        Self::new()
    }
}
