// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Async chunk sources and the streaming form of the block splitter.

use std::collections::VecDeque;
use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;

use crate::error::ShaError;
use crate::split::BlockSplitter;
use crate::traits::ChunkSource;

/// Channel-fed source; the stream ends once every sender is dropped.
impl<T: AsRef<[u8]>> ChunkSource for mpsc::Receiver<T> {
    type Chunk = T;

    async fn next_chunk(&mut self) -> Result<Option<T>, ShaError> {
        Ok(self.recv().await)
    }
}

/// Channel-fed source over an unbounded channel.
impl<T: AsRef<[u8]>> ChunkSource for mpsc::UnboundedReceiver<T> {
    type Chunk = T;

    async fn next_chunk(&mut self) -> Result<Option<T>, ShaError> {
        Ok(self.recv().await)
    }
}

/// Always-ready source over an iterator of chunks.
#[derive(Debug, Clone)]
pub struct IterChunks<I> {
    chunks: I,
}

impl<I> IterChunks<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    /// Wraps anything iterable as a chunk source.
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            chunks: chunks.into_iter(),
        }
    }
}

impl<I> ChunkSource for IterChunks<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Chunk = I::Item;

    async fn next_chunk(&mut self) -> Result<Option<I::Item>, ShaError> {
        Ok(self.chunks.next())
    }
}

/// Reads an [`AsyncRead`] in chunks of at most `chunk_len` bytes.
///
/// Short reads are passed on as short chunks; EOF ends the stream.
/// Interrupted reads are retried.
#[derive(Debug)]
pub struct ReaderChunks<R> {
    reader: R,
    chunk_len: usize,
}

impl<R: AsyncRead + Unpin> ReaderChunks<R> {
    /// Creates a reader source.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_len` is zero, since a zero-length read is EOF.
    pub fn new(reader: R, chunk_len: usize) -> Self {
        assert!(chunk_len > 0, "chunk length must be non-zero");

        Self { reader, chunk_len }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead + Unpin> ChunkSource for ReaderChunks<R> {
    type Chunk = Vec<u8>;

    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, ShaError> {
        let mut buf = vec![0u8; self.chunk_len];
        let read = loop {
            match self.reader.read(&mut buf).await {
                Ok(read) => break read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };

        if read == 0 {
            return Ok(None);
        }

        buf.truncate(read);
        Ok(Some(buf))
    }
}

/// Streaming-form splitter: regroups an async chunk source into blocks.
///
/// Yields full blocks as soon as they are complete and, once the source is
/// exhausted, at most one short remainder.
#[derive(Debug)]
pub struct ChunkBlocks<C> {
    source: C,
    splitter: BlockSplitter,
    ready: VecDeque<Vec<u8>>,
    exhausted: bool,
}

/// Splits the chunks of `source` into `block_len`-sized blocks.
///
/// # Panics
///
/// Panics if `block_len` is zero.
pub fn split_chunks<C: ChunkSource>(source: C, block_len: usize) -> ChunkBlocks<C> {
    ChunkBlocks {
        source,
        splitter: BlockSplitter::new(block_len),
        ready: VecDeque::new(),
        exhausted: false,
    }
}

impl<C: ChunkSource> ChunkBlocks<C> {
    /// Waits for the next block; `Ok(None)` once the input is used up.
    ///
    /// # Errors
    ///
    /// Propagates the source's errors. Blocks completed before the error are
    /// still yielded first.
    pub async fn next_block(&mut self) -> Result<Option<Vec<u8>>, ShaError> {
        loop {
            if let Some(block) = self.ready.pop_front() {
                return Ok(Some(block));
            }
            if self.exhausted {
                return Ok(None);
            }

            match self.source.next_chunk().await? {
                Some(chunk) => {
                    let ready = &mut self.ready;
                    self.splitter
                        .push(chunk.as_ref(), |block| ready.push_back(block.to_vec()));
                }
                None => {
                    self.exhausted = true;
                    self.ready.extend(self.splitter.take_remainder());
                }
            }
        }
    }
}
