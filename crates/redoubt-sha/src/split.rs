// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Regrouping of byte input into fixed-size blocks.
//!
//! Both forms share one rule: consecutive groups of `block_len` bytes, the
//! last one possibly shorter, and no group at all for empty input.
//!
//! - [`Blocks`] is the eager form over a finite byte iterator.
//! - [`BlockSplitter`] is the carry form: chunks of any length are pushed in
//!   arrival order and a block is emitted only once it is fully populated.

use std::iter::FusedIterator;

/// Lazy iterator of `block_len`-sized groups over a byte iterator.
///
/// Cloning the iterator restarts from the cloned source position.
#[derive(Debug, Clone)]
pub struct Blocks<I> {
    bytes: I,
    block_len: usize,
}

/// Groups `bytes` into blocks of `block_len`; the last block may be short.
///
/// # Panics
///
/// Panics if `block_len` is zero.
pub fn split_bytes<I>(bytes: I, block_len: usize) -> Blocks<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    assert!(block_len > 0, "block length must be non-zero");

    Blocks {
        bytes: bytes.into_iter(),
        block_len,
    }
}

impl<I> Iterator for Blocks<I>
where
    I: Iterator<Item = u8>,
{
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut block = Vec::with_capacity(self.block_len);
        block.extend(self.bytes.by_ref().take(self.block_len));

        if block.is_empty() { None } else { Some(block) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.bytes.size_hint();
        (
            lo.div_ceil(self.block_len),
            hi.map(|hi| hi.div_ceil(self.block_len)),
        )
    }
}

impl<I> FusedIterator for Blocks<I> where I: FusedIterator<Item = u8> {}

/// Carry-buffer splitter for input arriving in arbitrarily sized chunks.
///
/// Owns the tail of input that does not yet fill a block. Concatenating every
/// emitted block plus [`BlockSplitter::into_remainder`] reproduces the
/// concatenation of all pushed chunks, whatever the chunking was.
#[derive(Debug, Clone)]
pub struct BlockSplitter {
    block_len: usize,
    carry: Vec<u8>,
}

impl BlockSplitter {
    /// Creates an empty splitter.
    ///
    /// # Panics
    ///
    /// Panics if `block_len` is zero.
    pub fn new(block_len: usize) -> Self {
        assert!(block_len > 0, "block length must be non-zero");

        Self {
            block_len,
            carry: Vec::with_capacity(block_len),
        }
    }

    /// Block length this splitter emits.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Bytes held over, always shorter than one block.
    pub fn carry(&self) -> &[u8] {
        &self.carry
    }

    /// Appends `chunk` and calls `emit` once per completed block, in order.
    pub fn push<F>(&mut self, chunk: &[u8], mut emit: F)
    where
        F: FnMut(&[u8]),
    {
        let mut rest = chunk;

        if !self.carry.is_empty() {
            let borrow = (self.block_len - self.carry.len()).min(rest.len());
            self.carry.extend_from_slice(&rest[..borrow]);
            rest = &rest[borrow..];

            if self.carry.len() < self.block_len {
                return;
            }

            emit(&self.carry);
            self.carry.clear();
        }

        let mut blocks = rest.chunks_exact(self.block_len);
        for block in blocks.by_ref() {
            emit(block);
        }
        self.carry.extend_from_slice(blocks.remainder());
    }

    /// Takes the short remainder out, leaving the carry empty.
    ///
    /// Returns `None` when nothing is carried.
    pub fn take_remainder(&mut self) -> Option<Vec<u8>> {
        if self.carry.is_empty() {
            None
        } else {
            Some(std::mem::replace(
                &mut self.carry,
                Vec::with_capacity(self.block_len),
            ))
        }
    }

    /// Consumes the splitter, returning the short remainder if any.
    pub fn into_remainder(self) -> Option<Vec<u8>> {
        if self.carry.is_empty() {
            None
        } else {
            Some(self.carry)
        }
    }
}
