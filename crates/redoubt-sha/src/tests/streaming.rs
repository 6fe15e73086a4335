// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use proptest::prelude::*;
use tokio::io::{AsyncRead, ReadBuf};
use tokio::sync::mpsc;

use crate::digest::{digest, digest_bytes, digest_chunks, digest_reader};
use crate::error::ShaError;
use crate::hasher::Hasher;
use crate::sha1::Sha1;
use crate::sha256::Sha256;
use crate::sha512::Sha512;
use crate::stream::{IterChunks, ReaderChunks};
use crate::traits::{ChunkSource, Sha};

use super::chunk_at;

/// Yields `good` chunks, then fails.
struct FailingSource {
    good: Vec<Vec<u8>>,
}

impl ChunkSource for FailingSource {
    type Chunk = Vec<u8>;

    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, ShaError> {
        if self.good.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away").into());
        }
        Ok(Some(self.good.remove(0)))
    }
}

/// Reader that is interrupted before every successful read.
struct InterruptingReader<'a> {
    data: &'a [u8],
    interrupt_next: bool,
    interruptions: usize,
}

impl AsyncRead for InterruptingReader<'_> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if self.interrupt_next {
            self.interrupt_next = false;
            self.interruptions += 1;
            return Poll::Ready(Err(io::ErrorKind::Interrupted.into()));
        }

        self.interrupt_next = true;
        Pin::new(&mut self.data).poll_read(cx, buf)
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
        .block_on(future)
}

#[tokio::test]
async fn test_zero_chunks_is_empty_message() {
    let chunks: [&[u8]; 0] = [];
    let out = digest_chunks::<Sha256, _>(IterChunks::new(chunks))
        .await
        .expect("Failed to digest");

    assert_eq!(out, digest::<Sha256>(b""));
}

#[tokio::test]
async fn test_only_empty_chunks_is_empty_message() {
    let chunks = vec![Vec::<u8>::new(); 5];
    let out = digest_chunks::<Sha1, _>(IterChunks::new(chunks))
        .await
        .expect("Failed to digest");

    assert_eq!(out, digest::<Sha1>(b""));
}

#[tokio::test]
async fn test_uneven_chunks_match_closed_form() {
    let out = digest_chunks::<Sha256, _>(IterChunks::new([
        &b"ab"[..],
        &b""[..],
        &b"c"[..],
    ]))
    .await
    .expect("Failed to digest");

    assert_eq!(out, digest::<Sha256>(b"abc"));
}

#[tokio::test]
async fn test_channel_source_ends_when_sender_drops() {
    let message: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();
    let (tx, rx) = mpsc::channel::<Vec<u8>>(4);

    let chunks = chunk_at(&message, &[13, 64, 65, 300, 301, 999]);
    let producer = tokio::spawn(async move {
        for chunk in chunks {
            tx.send(chunk).await.expect("Failed to send chunk");
        }
    });

    let out = digest_chunks::<Sha512, _>(rx)
        .await
        .expect("Failed to digest");
    producer.await.expect("Producer panicked");

    assert_eq!(out, digest::<Sha512>(&message));
}

#[tokio::test]
async fn test_unbounded_channel_source() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tx.send(b"a".repeat(100)).expect("Failed to send chunk");
    tx.send(b"a".repeat(28)).expect("Failed to send chunk");
    drop(tx);

    let out = digest_chunks::<Sha1, _>(&mut rx)
        .await
        .expect("Failed to digest");

    assert_eq!(out, digest::<Sha1>(&[b'a'; 128]));
}

#[tokio::test]
async fn test_reader_source_reads_short_chunks() {
    let message: Vec<u8> = (0..=255u8).cycle().take(1500).collect();
    let mut source = ReaderChunks::new(&message[..], 7);

    let first = source
        .next_chunk()
        .await
        .expect("Failed to read")
        .expect("Reader ended early");
    assert_eq!(first, message[..7]);

    let rest = digest_chunks::<Sha256, _>(&mut source)
        .await
        .expect("Failed to digest");
    assert_eq!(rest, digest::<Sha256>(&message[7..]));
    assert!(source.into_inner().is_empty());
}

#[tokio::test]
async fn test_digest_reader_matches_closed_form() {
    let message = b"The quick brown fox jumps over the lazy dog".repeat(11);

    for chunk_len in [1usize, 7, 64, 4096] {
        let out = digest_reader::<Sha512, _>(&message[..], chunk_len)
            .await
            .expect("Failed to digest");
        assert_eq!(out, digest::<Sha512>(&message), "chunk length {chunk_len}");
    }
}

#[tokio::test]
async fn test_interrupted_reads_are_retried() {
    let message: Vec<u8> = (0..200u8).collect();
    let reader = InterruptingReader {
        data: &message,
        interrupt_next: true,
        interruptions: 0,
    };
    let mut source = ReaderChunks::new(reader, 64);

    let out = digest_chunks::<Sha256, _>(&mut source)
        .await
        .expect("Interrupted reads must not fail the digest");

    assert_eq!(out, digest::<Sha256>(&message));
    assert!(source.into_inner().interruptions >= 4);
}

#[test]
#[should_panic(expected = "chunk length must be non-zero")]
fn test_zero_chunk_reader_panics() {
    let _ = ReaderChunks::new(&b"abc"[..], 0);
}

#[tokio::test]
async fn test_source_error_is_returned() {
    let source = FailingSource {
        good: vec![vec![1u8; 100], vec![2u8; 3]],
    };

    let err = digest_chunks::<Sha256, _>(source)
        .await
        .expect_err("Source failure must surface");

    assert!(matches!(err, ShaError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[tokio::test]
async fn test_byte_at_a_time_for_every_algorithm() {
    let message: Vec<u8> = (0..300u16).map(|i| (i % 251) as u8).collect();

    async fn check<S: Sha>(message: &[u8]) {
        let bytes = message.chunks(1);
        let out = digest_chunks::<S, _>(IterChunks::new(bytes))
            .await
            .expect("Failed to digest");
        assert_eq!(out, digest::<S>(message), "{}", S::ALGORITHM);
    }

    check::<Sha1>(&message).await;
    check::<Sha256>(&message).await;
    check::<Sha512>(&message).await;
}

#[test]
fn test_hasher_counts_every_byte() {
    let mut hasher = Hasher::<Sha256>::default();
    assert_eq!(hasher.message_len(), 0);

    hasher.update(&[0u8; 70]);
    assert_eq!(hasher.message_len(), 70);

    hasher.update(&[]);
    hasher.update(&[0u8; 58]);
    assert_eq!(hasher.message_len(), 128);

    assert_eq!(hasher.finalize(), digest::<Sha256>(&[0u8; 128]));
}

#[test]
fn test_hasher_clone_forks_computation() {
    let mut hasher = Hasher::<Sha1>::new();
    hasher.update(b"hello ");

    let mut fork = hasher.clone();
    hasher.update(b"world");
    fork.update(b"there");

    assert_eq!(hasher.finalize(), digest::<Sha1>(b"hello world"));
    assert_eq!(fork.finalize(), digest::<Sha1>(b"hello there"));
}

proptest! {
    #[test]
    fn test_chunking_does_not_change_digest(
        message in proptest::collection::vec(any::<u8>(), 0..600),
        cuts in proptest::collection::vec(any::<usize>(), 0..12),
    ) {
        let chunks = chunk_at(&message, &cuts);

        for expected in [digest::<Sha1>(&message), digest::<Sha256>(&message), digest::<Sha512>(&message)] {
            let (hashed, streamed) = match expected.len() {
                20 => {
                    let mut hasher = Hasher::<Sha1>::new();
                    chunks.iter().for_each(|c| hasher.update(c));
                    let streamed = block_on(digest_chunks::<Sha1, _>(IterChunks::new(chunks.iter())));
                    (hasher.finalize(), streamed)
                }
                32 => {
                    let mut hasher = Hasher::<Sha256>::new();
                    chunks.iter().for_each(|c| hasher.update(c));
                    let streamed = block_on(digest_chunks::<Sha256, _>(IterChunks::new(chunks.iter())));
                    (hasher.finalize(), streamed)
                }
                _ => {
                    let mut hasher = Hasher::<Sha512>::new();
                    chunks.iter().for_each(|c| hasher.update(c));
                    let streamed = block_on(digest_chunks::<Sha512, _>(IterChunks::new(chunks.iter())));
                    (hasher.finalize(), streamed)
                }
            };

            prop_assert_eq!(&hashed, &expected);
            prop_assert_eq!(streamed.expect("Failed to digest"), expected);
        }
    }

    #[test]
    fn test_byte_iterator_matches_slice(
        message in proptest::collection::vec(any::<u8>(), 0..400),
    ) {
        prop_assert_eq!(
            digest_bytes::<Sha256, _>(message.iter().copied()),
            digest::<Sha256>(&message)
        );
        prop_assert_eq!(
            digest_bytes::<Sha512, _>(message.iter().copied()),
            digest::<Sha512>(&message)
        );
    }
}
