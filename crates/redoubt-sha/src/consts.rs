// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-1 block size in bytes
pub const SHA1_BLOCK_LEN: usize = 64;

/// SHA-1 output size in bytes
pub const SHA1_DIGEST_LEN: usize = 20;

/// SHA-256 block size in bytes
pub const SHA256_BLOCK_LEN: usize = 64;

/// SHA-256 output size in bytes
pub const SHA256_DIGEST_LEN: usize = 32;

/// SHA-512 block size in bytes
pub const SHA512_BLOCK_LEN: usize = 128;

/// SHA-512 output size in bytes
pub const SHA512_DIGEST_LEN: usize = 64;
