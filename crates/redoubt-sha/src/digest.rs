// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest entry points.
//!
//! - Closed form: the whole message is available; pad it and fold every
//!   block from H(0).
//! - Open form: chunks arrive over time; full blocks are folded as they
//!   complete and the carried tail is padded once the source ends.

use tokio::io::AsyncRead;

use crate::compress::ChainingValue;
use crate::error::ShaError;
use crate::hasher::Hasher;
use crate::pad::{pad, pad_blocks};
use crate::stream::ReaderChunks;
use crate::traits::{ChunkSource, Sha};

/// Closed-form digest of a byte slice.
pub fn digest<S: Sha>(message: &[u8]) -> Vec<u8> {
    let mut state = ChainingValue::<S>::new();
    for block in pad_blocks(message.chunks(S::BLOCK_LEN), S::layout(), 0) {
        state.compress(block.as_ref());
    }
    state.to_bytes()
}

/// Closed-form digest of a finite byte iterator.
pub fn digest_bytes<S, I>(message: I) -> Vec<u8>
where
    S: Sha,
    I: IntoIterator<Item = u8>,
{
    let mut state = ChainingValue::<S>::new();
    for block in pad(message, S::layout(), 0) {
        state.compress(block.as_ref());
    }
    state.to_bytes()
}

/// Open-form digest of every chunk `source` yields, in order.
///
/// Zero chunks, or only empty chunks, give the digest of the empty message.
///
/// # Errors
///
/// Returns the first error of `source`; the partial state is dropped.
pub async fn digest_chunks<S, C>(mut source: C) -> Result<Vec<u8>, ShaError>
where
    S: Sha,
    C: ChunkSource,
{
    let mut hasher = Hasher::<S>::new();
    let mut chunks: u64 = 0;

    while let Some(chunk) = source.next_chunk().await? {
        let chunk = chunk.as_ref();
        tracing::trace!(algorithm = %S::ALGORITHM, len = chunk.len(), "chunk received");

        hasher.update(chunk);
        chunks += 1;
    }

    tracing::debug!(
        algorithm = %S::ALGORITHM,
        chunks,
        message_len = hasher.message_len(),
        "chunk source exhausted"
    );

    Ok(hasher.finalize())
}

/// Open-form digest of an async reader, read `chunk_len` bytes at a time.
///
/// # Errors
///
/// Returns [`ShaError::Io`] if a read fails.
///
/// # Panics
///
/// Panics if `chunk_len` is zero.
pub async fn digest_reader<S, R>(reader: R, chunk_len: usize) -> Result<Vec<u8>, ShaError>
where
    S: Sha,
    R: AsyncRead + Unpin,
{
    digest_chunks::<S, _>(ReaderChunks::new(reader, chunk_len)).await
}
