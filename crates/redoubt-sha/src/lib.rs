// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1, SHA-256 and SHA-512 per FIPS 180-4 / RFC 6234.
//!
//! One compression engine and one padder, written against the [`Sha`]
//! parameter set and the [`word::Word`] abstraction, serve all three
//! algorithms and both word widths.
//!
//! Input can be hashed in closed form, when the whole message is at hand, or
//! in open form from an async [`ChunkSource`] whose chunk boundaries have no
//! relation to the block size.
//!
//! ```rust
//! use redoubt_sha::{Sha256, digest};
//!
//! let out = digest::<Sha256>(b"abc");
//! assert_eq!(out[..4], [0xba, 0x78, 0x16, 0xbf]);
//! ```
//!
//! ```rust
//! # async fn example() -> Result<(), redoubt_sha::ShaError> {
//! use redoubt_sha::{IterChunks, Sha512, digest, digest_chunks};
//!
//! let chunks = IterChunks::new([&b"ab"[..], &b""[..], &b"c"[..]]);
//! let out = digest_chunks::<Sha512, _>(chunks).await?;
//! assert_eq!(out, digest::<Sha512>(b"abc"));
//! # Ok(())
//! # }
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod compress;
mod consts;
mod convert;
mod digest;
mod error;
mod hasher;
mod pad;
mod sha1;
mod sha2;
mod sha256;
mod sha512;
mod split;
mod stream;
mod traits;

pub mod word;

pub use algorithm::Algorithm;
pub use compress::{ChainingValue, compress};
pub use consts::{
    SHA1_BLOCK_LEN, SHA1_DIGEST_LEN, SHA256_BLOCK_LEN, SHA256_DIGEST_LEN, SHA512_BLOCK_LEN,
    SHA512_DIGEST_LEN,
};
pub use convert::{bytes_to_words, words_to_bytes};
pub use digest::{digest, digest_bytes, digest_chunks, digest_reader};
pub use error::ShaError;
pub use hasher::Hasher;
pub use pad::{
    BlockLayout, LengthField, MARKER, PaddedBlock, Padder, encode_bit_length, pad, pad_blocks,
};
pub use sha1::Sha1;
pub use sha256::Sha256;
pub use sha512::Sha512;
pub use split::{BlockSplitter, Blocks, split_bytes};
pub use stream::{ChunkBlocks, IterChunks, ReaderChunks, split_chunks};
pub use traits::{ChunkSource, Sha};
