// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental hashing state: chaining value, carry buffer and byte counter
//! of one computation.

use crate::compress::ChainingValue;
use crate::pad::pad_blocks;
use crate::split::BlockSplitter;
use crate::traits::Sha;

/// Streaming state of one hash computation.
///
/// Full blocks are compressed as soon as they are complete; the short tail
/// stays in the carry buffer until [`Hasher::finalize`] pads it with the
/// accumulated byte count.
#[derive(Debug, Clone)]
pub struct Hasher<S: Sha> {
    state: ChainingValue<S>,
    splitter: BlockSplitter,
    compressed_bytes: u128,
}

impl<S: Sha> Hasher<S> {
    /// Creates a state at H(0) with nothing digested.
    pub fn new() -> Self {
        Self {
            state: ChainingValue::new(),
            splitter: BlockSplitter::new(S::BLOCK_LEN),
            compressed_bytes: 0,
        }
    }

    /// Feeds the next chunk of the message. Chunks may be empty.
    pub fn update(&mut self, chunk: &[u8]) {
        let state = &mut self.state;
        let mut folded: u128 = 0;

        self.splitter.push(chunk, |block| {
            state.compress(block);
            folded += 1;
        });

        self.compressed_bytes = folded
            .checked_mul(S::BLOCK_LEN as u128)
            .and_then(|bytes| self.compressed_bytes.checked_add(bytes))
            .unwrap_or_else(|| panic!("{} byte counter overflows u128", S::ALGORITHM));
    }

    /// Total message bytes fed so far.
    pub fn message_len(&self) -> u128 {
        self.compressed_bytes + self.splitter.carry().len() as u128
    }

    /// Pads the carried tail and returns the digest.
    pub fn finalize(self) -> Vec<u8> {
        let Self {
            mut state,
            splitter,
            compressed_bytes,
        } = self;

        let tail = splitter.into_remainder();
        tracing::debug!(
            algorithm = %S::ALGORITHM,
            compressed_bytes,
            tail_len = tail.as_ref().map_or(0, Vec::len),
            "finalizing digest"
        );

        for block in pad_blocks(tail, S::layout(), compressed_bytes) {
            state.compress(block.as_ref());
        }

        state.to_bytes()
    }
}

impl<S: Sha> Default for Hasher<S> {
    fn default() -> Self {
        Self::new()
    }
}
