// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use redoubt_sha::{Algorithm, ReaderChunks};

use crate::error::ShasumError;

/// Outcome counts of one [`shasum`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files whose digest was printed
    pub hashed: usize,
    /// Non-regular files passed over
    pub skipped: usize,
    /// Files that could not be hashed
    pub failed: usize,
}

impl Summary {
    /// True when no file failed.
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Formats one output line: lowercase hex digest, two spaces, file name.
pub fn digest_line(digest: &[u8], path: &Path) -> String {
    format!("{}  {}", hex::encode(digest), path.display())
}

/// Digests the file at `path`, reading `chunk_size` bytes at a time.
///
/// Returns `Ok(None)` for anything that is not a regular file.
///
/// # Errors
///
/// Returns [`ShasumError`] if the file cannot be stat'ed, opened or read.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub async fn hash_file(
    algorithm: Algorithm,
    path: &Path,
    chunk_size: usize,
) -> Result<Option<Vec<u8>>, ShasumError> {
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        tracing::debug!(path = %path.display(), "skipping non-regular file");
        return Ok(None);
    }

    let file = tokio::fs::File::open(path).await?;
    let digest = algorithm
        .digest_chunks(ReaderChunks::new(file, chunk_size))
        .await?;

    tracing::debug!(
        path = %path.display(),
        algorithm = %algorithm,
        len = metadata.len(),
        "file hashed"
    );

    Ok(Some(digest))
}

/// Hashes `paths` in order, writing digest lines to `out` and per-file
/// failures to `err`.
///
/// A failing file does not stop the run; check [`Summary::success`].
///
/// # Errors
///
/// Returns an error only if writing to `out` or `err` fails.
pub async fn shasum<O, E>(
    algorithm: Algorithm,
    paths: &[PathBuf],
    chunk_size: usize,
    out: &mut O,
    err: &mut E,
) -> io::Result<Summary>
where
    O: Write,
    E: Write,
{
    let mut summary = Summary::default();

    for path in paths {
        match hash_file(algorithm, path, chunk_size).await {
            Ok(Some(digest)) => {
                writeln!(out, "{}", digest_line(&digest, path))?;
                summary.hashed += 1;
            }
            Ok(None) => summary.skipped += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to hash file");
                writeln!(err, "redoubt-shasum: {}: {e}", path.display())?;
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
