// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian packing between byte sequences and word arrays.

use crate::word::Word;

/// Splits `bytes` into big-endian words.
///
/// # Panics
///
/// Panics if `bytes.len()` is not a multiple of the word size.
pub fn bytes_to_words<W: Word>(bytes: &[u8]) -> Vec<W> {
    assert_word_multiple::<W>(bytes.len());

    bytes.chunks_exact(W::BYTES).map(W::from_be_slice).collect()
}

/// Renders each word as `W::BYTES` big-endian bytes.
pub fn words_to_bytes<W: Word>(words: &[W]) -> Vec<u8> {
    let mut out = vec![0u8; words.len() * W::BYTES];
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
        word.write_be(chunk);
    }
    out
}

/// Allocation-free variant of [`bytes_to_words`] used by the compression engine.
#[inline(always)]
pub(crate) fn load_words<W: Word>(bytes: &[u8], out: &mut [W]) {
    assert_word_multiple::<W>(bytes.len());
    assert_eq!(
        bytes.len() / W::BYTES,
        out.len(),
        "word buffer holds {} words, input holds {}",
        out.len(),
        bytes.len() / W::BYTES
    );

    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
        *word = W::from_be_slice(chunk);
    }
}

#[inline(always)]
fn assert_word_multiple<W: Word>(len: usize) {
    assert!(
        len % W::BYTES == 0,
        "byte length {len} is not a multiple of the {}-byte word size",
        W::BYTES
    );
}
