// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! File checksums over `redoubt-sha`.
//!
//! Each named regular file is streamed through the open-form digest in
//! fixed-size reads and reported as `<hex digest>  <file name>`, the format
//! `sha256sum` and friends print. Directories and other non-regular files are
//! skipped; unreadable files are reported and the run goes on.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cli;
mod error;
mod shasum;

pub mod logging;

pub use cli::{Cli, DEFAULT_CHUNK_SIZE, parse_chunk_size};
pub use error::ShasumError;
pub use shasum::{Summary, digest_line, hash_file, shasum};
