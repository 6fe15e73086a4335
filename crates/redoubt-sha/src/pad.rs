// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle–Damgård message padding per RFC 6234 Sections 4.1 and 4.2.
//!
//! The padded message is the original bytes, a `0x80` marker, zero fill and
//! the big-endian message length in bits, right-aligned in the last block.
//! When the marker and the length field do not both fit after the short
//! final block, the marker block is emitted as is and one extra all-zero
//! block carries the length.
//!
//! An initial byte count lets the padder finish a message whose leading full
//! blocks were already compressed elsewhere; only the tail is passed in.

use std::iter::Fuse;

use crate::split::{Blocks, split_bytes};

/// Padding start marker (a single `1` bit followed by zeros)
pub const MARKER: u8 = 0x80;

/// Width of the message length field written at the end of the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthField {
    /// 64-bit length (SHA-1, SHA-256)
    Bits64,
    /// 128-bit length (SHA-512)
    Bits128,
}

impl LengthField {
    /// Field width in bits
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits64 => 64,
            Self::Bits128 => 128,
        }
    }

    /// Field width in bytes
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Block geometry an algorithm pads against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockLayout {
    /// Block size in bytes
    pub block_len: usize,
    /// Trailer length field
    pub length_field: LengthField,
}

impl BlockLayout {
    /// Creates a layout.
    ///
    /// # Panics
    ///
    /// Panics if the block cannot hold the marker byte plus the length field.
    pub const fn new(block_len: usize, length_field: LengthField) -> Self {
        assert!(
            block_len > length_field.bytes(),
            "block too small for marker and length field"
        );

        Self {
            block_len,
            length_field,
        }
    }

    /// Number of blocks a message of `message_len` bytes pads out to:
    /// `ceil((message_len + 1 + length_field_bytes) / block_len)`.
    pub const fn padded_block_count(&self, message_len: usize) -> usize {
        (message_len + 1 + self.length_field.bytes()).div_ceil(self.block_len)
    }
}

/// A block emitted by [`Padder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaddedBlock<B> {
    /// A complete input block passed through unchanged
    Message(B),
    /// A block built by the padder (short tail, marker, zeros, length)
    Padding(Box<[u8]>),
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for PaddedBlock<B> {
    fn as_ref(&self) -> &[u8] {
        match self {
            Self::Message(block) => block.as_ref(),
            Self::Padding(block) => block,
        }
    }
}

/// Iterator adding Merkle–Damgård padding to a sequence of blocks.
///
/// Every input block but the last must be exactly `block_len` long; a short
/// block is taken as the tail of the message.
///
/// # Panics
///
/// Panics if a block is longer than `block_len`, or if a short block is
/// followed by more input.
#[derive(Debug, Clone)]
pub struct Padder<I: Iterator> {
    blocks: Fuse<I>,
    layout: BlockLayout,
    byte_count: u128,
    tail: Option<Vec<u8>>,
    trailer: Option<std::vec::IntoIter<Box<[u8]>>>,
}

/// Pads a byte sequence, splitting it into blocks first.
///
/// `initial_count` is the number of message bytes already digested before
/// `bytes`.
pub fn pad<I>(bytes: I, layout: BlockLayout, initial_count: u128) -> Padder<Blocks<I::IntoIter>>
where
    I: IntoIterator<Item = u8>,
{
    Padder::new(split_bytes(bytes, layout.block_len), layout, initial_count)
}

/// Pads an already block-split sequence (any `AsRef<[u8]>` blocks).
pub fn pad_blocks<I>(blocks: I, layout: BlockLayout, initial_count: u128) -> Padder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    Padder::new(blocks.into_iter(), layout, initial_count)
}

impl<I> Padder<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    /// Creates a padder over `blocks`, counting from `initial_count` bytes.
    pub fn new(blocks: I, layout: BlockLayout, initial_count: u128) -> Self {
        Self {
            blocks: blocks.fuse(),
            layout,
            byte_count: initial_count,
            tail: None,
            trailer: None,
        }
    }

    /// Bytes counted so far, including the initial count.
    pub fn byte_count(&self) -> u128 {
        self.byte_count
    }

    fn build_trailer(&mut self) -> Vec<Box<[u8]>> {
        let block_len = self.layout.block_len;
        let field_len = self.layout.length_field.bytes();
        let length = encode_bit_length(self.byte_count, self.layout.length_field);

        let mut block = vec![0u8; block_len].into_boxed_slice();

        match self.tail.take() {
            Some(tail) => {
                block[..tail.len()].copy_from_slice(&tail);
                block[tail.len()] = MARKER;

                if block_len - tail.len() > field_len {
                    block[block_len - field_len..].copy_from_slice(&length);
                    vec![block]
                } else {
                    let mut extra = vec![0u8; block_len].into_boxed_slice();
                    extra[block_len - field_len..].copy_from_slice(&length);
                    vec![block, extra]
                }
            }
            None => {
                // Block-aligned input: one block of pure padding
                block[0] = MARKER;
                block[block_len - field_len..].copy_from_slice(&length);
                vec![block]
            }
        }
    }
}

impl<I> Iterator for Padder<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Item = PaddedBlock<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(trailer) = self.trailer.as_mut() {
            return trailer.next().map(PaddedBlock::Padding);
        }

        let block_len = self.layout.block_len;
        for block in self.blocks.by_ref() {
            let len = block.as_ref().len();
            if let Some(tail) = &self.tail {
                panic!(
                    "short block of {} bytes is not the last input block",
                    tail.len()
                );
            }
            assert!(
                len <= block_len,
                "input block of {len} bytes exceeds block length {block_len}"
            );

            self.byte_count = self
                .byte_count
                .checked_add(len as u128)
                .unwrap_or_else(|| panic!("message byte count overflows u128"));

            if len == block_len {
                return Some(PaddedBlock::Message(block));
            }
            self.tail = Some(block.as_ref().to_vec());
        }

        let trailer = self.build_trailer();
        self.trailer.insert(trailer.into_iter()).next().map(PaddedBlock::Padding)
    }
}

/// Encodes `byte_count * 8` as a big-endian field of `field` width.
///
/// For the 128-bit field the high half is `bits >> 64`.
///
/// # Panics
///
/// Panics when the bit count does not fit the field.
pub fn encode_bit_length(byte_count: u128, field: LengthField) -> Vec<u8> {
    let bits = byte_count
        .checked_mul(8)
        .unwrap_or_else(|| panic!("bit length of {byte_count} bytes exceeds 128 bits"));

    if field == LengthField::Bits64 {
        assert!(
            bits <= u128::from(u64::MAX),
            "bit length {bits} does not fit a 64-bit length field"
        );
    }

    let be = bits.to_be_bytes();
    be[be.len() - field.bytes()..].to_vec()
}
