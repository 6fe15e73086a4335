// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt::Debug;
use std::future::Future;

use crate::algorithm::Algorithm;
use crate::error::ShaError;
use crate::pad::{BlockLayout, LengthField};
use crate::word::Word;

/// Parameter set of one SHA algorithm.
///
/// Bundles the word width, block geometry, initial chaining value, round
/// constants and the two algorithm-specific mixing steps. The compression
/// engine ([`crate::compress`]) and the padder are written once against this
/// trait; implementors are zero-sized markers holding only static data.
pub trait Sha: Copy + Debug + Default + Send + Sync + 'static {
    /// Word type (`u32` or `u64`)
    type Word: Word;

    /// Runtime tag for this parameter set
    const ALGORITHM: Algorithm;

    /// Block size in bytes
    const BLOCK_LEN: usize;

    /// Width of the message length trailer
    const LENGTH_FIELD: LengthField;

    /// Number of rounds, and so length of the message schedule
    const ROUNDS: usize;

    /// Initial chaining value H(0)
    const H0: &'static [Self::Word];

    /// Round constants K[0..ROUNDS]
    const K: &'static [Self::Word];

    /// Digest size in bytes
    const DIGEST_LEN: usize = Self::H0.len() * <Self::Word as Word>::BYTES;

    /// Computes schedule word `W[t]` for `t >= BLOCK_LEN / word size` from
    /// the already filled entries `w[..t]`.
    fn expand(w: &[Self::Word], t: usize) -> Self::Word;

    /// Runs round `t` over the working variables `v` with constant `k` and
    /// schedule word `w`.
    fn round(v: &mut [Self::Word], t: usize, k: Self::Word, w: Self::Word);

    /// Block geometry used for padding.
    fn layout() -> BlockLayout {
        BlockLayout::new(Self::BLOCK_LEN, Self::LENGTH_FIELD)
    }
}

/// Asynchronous source of byte chunks.
///
/// Chunks may have any length, including zero. `Ok(None)` marks the end of
/// the stream; a source that never returns it never lets a digest complete.
pub trait ChunkSource {
    /// Chunk type handed out by the source
    type Chunk: AsRef<[u8]>;

    /// Waits for the next chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ShaError::Io`] if the underlying reader fails.
    fn next_chunk(&mut self) -> impl Future<Output = Result<Option<Self::Chunk>, ShaError>>;
}

impl<C: ChunkSource> ChunkSource for &mut C {
    type Chunk = C::Chunk;

    fn next_chunk(&mut self) -> impl Future<Output = Result<Option<Self::Chunk>, ShaError>> {
        (**self).next_chunk()
    }
}
