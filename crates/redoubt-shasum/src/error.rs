// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use redoubt_sha::ShaError;
use thiserror::Error;

/// Failure to hash one file.
#[derive(Debug, Error)]
pub enum ShasumError {
    /// Stat or open failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Reading the file contents failed mid-digest.
    #[error(transparent)]
    Sha(#[from] ShaError),
}
