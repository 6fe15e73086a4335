// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime selection among the compiled-in parameter sets.

use std::fmt;
use std::str::FromStr;

use crate::digest::{digest, digest_chunks};
use crate::error::ShaError;
use crate::pad::LengthField;
use crate::sha1::Sha1;
use crate::sha256::Sha256;
use crate::sha512::Sha512;
use crate::traits::{ChunkSource, Sha};

/// Tag naming one supported algorithm.
///
/// Each variant dispatches to its zero-sized [`Sha`] parameter set, so the
/// engine stays monomorphic per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-1: 80 rounds, 64-byte blocks, 20-byte digest
    Sha1,
    /// SHA-256: 64 rounds, 64-byte blocks, 32-byte digest
    Sha256,
    /// SHA-512: 80 rounds, 128-byte blocks, 64-byte digest
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 3] = [Self::Sha1, Self::Sha256, Self::Sha512];

    /// Canonical name, e.g. `SHA-256`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Block size in bytes
    pub const fn block_len(self) -> usize {
        match self {
            Self::Sha1 => Sha1::BLOCK_LEN,
            Self::Sha256 => Sha256::BLOCK_LEN,
            Self::Sha512 => Sha512::BLOCK_LEN,
        }
    }

    /// Digest size in bytes
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => Sha1::DIGEST_LEN,
            Self::Sha256 => Sha256::DIGEST_LEN,
            Self::Sha512 => Sha512::DIGEST_LEN,
        }
    }

    /// Width of the padding length field
    pub const fn length_field(self) -> LengthField {
        match self {
            Self::Sha1 => Sha1::LENGTH_FIELD,
            Self::Sha256 => Sha256::LENGTH_FIELD,
            Self::Sha512 => Sha512::LENGTH_FIELD,
        }
    }

    /// Closed-form digest of `message`.
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => digest::<Sha1>(message),
            Self::Sha256 => digest::<Sha256>(message),
            Self::Sha512 => digest::<Sha512>(message),
        }
    }

    /// Open-form digest of every chunk `source` yields.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `source`.
    pub async fn digest_chunks<C: ChunkSource>(self, source: C) -> Result<Vec<u8>, ShaError> {
        match self {
            Self::Sha1 => digest_chunks::<Sha1, C>(source).await,
            Self::Sha256 => digest_chunks::<Sha256, C>(source).await,
            Self::Sha512 => digest_chunks::<Sha512, C>(source).await,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ShaError;

    /// Accepts `1`, `256`, `512` and the names with or without `sha`/`sha-`
    /// prefix, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bits = lower
            .strip_prefix("sha-")
            .or_else(|| lower.strip_prefix("sha"))
            .unwrap_or(lower.as_str());

        match bits {
            "1" => Ok(Self::Sha1),
            "256" => Ok(Self::Sha256),
            "512" => Ok(Self::Sha512),
            _ => Err(ShaError::UnknownAlgorithm(s.to_string())),
        }
    }
}
