// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for redoubt-sha.
//!
//! Only failures of an external byte source are recoverable. Contract
//! violations (wrong block length, a message too long for its length field)
//! panic instead of producing a wrong digest.

use thiserror::Error;

/// Errors surfaced by the streaming digest and by algorithm parsing.
#[derive(Debug, Error)]
pub enum ShaError {
    /// Reading the next chunk from an async reader failed.
    #[error("chunk source failed: {0}")]
    Io(#[from] std::io::Error),

    /// An algorithm name did not match SHA-1, SHA-256 or SHA-512.
    #[error("unknown algorithm `{0}` (expected 1, 256 or 512)")]
    UnknownAlgorithm(String),
}
