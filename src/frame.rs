// src/frame.rs
//! Byte framing shared by embedding and extraction
//!
//! A frame is a 32-bit big-endian payload length (in bytes) followed by the
//! payload. Frames are walked bit by bit, most significant bit first.

use crate::consts::HEADER_BITS;
use crate::error::{CoreError, Result};

pub const HEADER_BYTES: usize = HEADER_BITS / 8;

/// Encode the length prefix for a payload of `len` bytes
pub fn encode_header(len: usize) -> Result<[u8; HEADER_BYTES]> {
    let len = u32::try_from(len).map_err(|_| CoreError::CapacityExceeded {
        required_bits: (len as u64).saturating_mul(8).saturating_add(HEADER_BITS as u64),
        available_bits: u64::from(u32::MAX) * 8 + HEADER_BITS as u64,
    })?;
    Ok(len.to_be_bytes())
}

pub fn decode_header(header: [u8; HEADER_BYTES]) -> u32 {
    u32::from_be_bytes(header)
}

/// Iterator over the bits of a byte slice, MSB first, each yielded as 0 or 1
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Bits<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, index: 0 }
    }
}

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.index / 8)?;
        let shift = 7 - (self.index % 8);
        self.index += 1;
        Some((byte >> shift) & 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() * 8 - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

/// Reassemble MSB-first bits into bytes
///
/// A trailing partial byte is left-aligned, the way it was read.
pub fn pack_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let bits = bits.into_iter();
    let mut out = Vec::with_capacity(bits.size_hint().0.div_ceil(8));

    let mut byte = 0u8;
    let mut bit_count = 0usize;
    for bit in bits {
        byte = (byte << 1) | (bit & 1);
        bit_count += 1;

        if bit_count == 8 {
            out.push(byte);
            byte = 0;
            bit_count = 0;
        }
    }

    if bit_count > 0 {
        out.push(byte << (8 - bit_count));
    }

    out
}
