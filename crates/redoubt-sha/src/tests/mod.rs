// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod compress;
mod streaming;

/// Decodes a hex test vector.
pub(crate) fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("Failed to decode hex test vector")
}

/// Cuts `message` at the given (unsorted, possibly repeated) offsets.
pub(crate) fn chunk_at(message: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut cuts: Vec<usize> = cuts.iter().map(|c| c % (message.len() + 1)).collect();
    cuts.sort_unstable();

    let mut chunks = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        chunks.push(message[start..cut].to_vec());
        start = cut;
    }
    chunks.push(message[start..].to_vec());
    chunks
}
