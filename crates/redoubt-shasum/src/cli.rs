// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::Parser;
use redoubt_sha::Algorithm;

/// Default read size: 1 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Command line of `redoubt-shasum`.
#[derive(Debug, Parser)]
#[command(
    name = "redoubt-shasum",
    version,
    about = "Print SHA-1, SHA-256 or SHA-512 checksums of files"
)]
pub struct Cli {
    /// Algorithm: 1, 256 or 512 (also sha1, sha-256, ...)
    #[arg(short, long, default_value = "256")]
    pub algorithm: Algorithm,

    /// Bytes read from a file per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Files to hash
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Parses a positive chunk size in bytes.
pub fn parse_chunk_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be greater than zero".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(format!("invalid chunk size `{s}`: {e}")),
    }
}
