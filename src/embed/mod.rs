// src/embed/mod.rs
//! LSB embedding of length-framed payloads into carrier channel bytes
//!
//! Protocol constants shared by [`Embedder::embed`] and [`Embedder::extract`]:
//!
//! - one payload bit per channel byte, in its least significant bit
//! - row-major traversal, channels interleaved per pixel (`R G B [A]`)
//! - a 32-bit big-endian byte-length header first, then the payload
//! - bits taken MSB first
//!
//! The channel layout is fixed by the embedder, never guessed from the image.

mod carrier;

pub use carrier::Carrier;

use tracing::{debug, warn};

use crate::config::EmbeddingConfig;
use crate::consts::HEADER_BITS;
use crate::enums::ChannelLayout;
use crate::error::{CoreError, Result};
use crate::frame::{decode_header, encode_header, pack_bits, Bits, HEADER_BYTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Embedder {
    layout: ChannelLayout,
}

impl Embedder {
    pub fn new(layout: ChannelLayout) -> Self {
        Self { layout }
    }

    pub fn from_config(config: &EmbeddingConfig) -> Self {
        Self::new(config.layout)
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Payload bits the carrier can hold once the header is reserved.
    pub fn capacity_bits(&self, carrier: &Carrier) -> Result<u64> {
        self.check_layout(carrier)?;
        Ok(carrier.lsb_count().saturating_sub(HEADER_BITS as u64))
    }

    /// Largest payload, in whole bytes, [`Embedder::embed`] accepts.
    pub fn max_payload_len(&self, carrier: &Carrier) -> Result<usize> {
        let bytes = self.capacity_bits(carrier)? / 8;
        Ok(usize::try_from(bytes).unwrap_or(usize::MAX))
    }

    /// Write `payload` into a copy of `carrier`.
    pub fn embed(&self, carrier: &Carrier, payload: &[u8]) -> Result<Carrier> {
        self.check_layout(carrier)?;

        let available_bits = carrier.lsb_count();
        let required_bits = (payload.len() as u64)
            .saturating_mul(8)
            .saturating_add(HEADER_BITS as u64);
        if required_bits > available_bits {
            return Err(CoreError::CapacityExceeded {
                required_bits,
                available_bits,
            });
        }

        let header = encode_header(payload.len())?;
        let frame = Bits::new(&header).chain(Bits::new(payload));

        let mut out = carrier.clone();
        for (channel, bit) in out.bytes_mut().iter_mut().zip(frame) {
            *channel = (*channel & !1) | bit;
        }

        debug!(
            payload_bytes = payload.len(),
            required_bits, available_bits, "embedded payload frame"
        );
        Ok(out)
    }

    /// Read the framed payload back out of `carrier`.
    pub fn extract(&self, carrier: &Carrier) -> Result<Vec<u8>> {
        self.check_layout(carrier)?;

        let lsbs = carrier.as_bytes();
        if lsbs.len() < HEADER_BITS {
            return Err(CoreError::InvalidHeader(format!(
                "image holds {} LSBs, fewer than the {HEADER_BITS}-bit header",
                lsbs.len()
            )));
        }

        let mut header = [0u8; HEADER_BYTES];
        header.copy_from_slice(&pack_bits(lsb_bits(&lsbs[..HEADER_BITS])));
        let declared = decode_header(header);

        let capacity_bits = self.capacity_bits(carrier)?;
        let declared_bits = u64::from(declared) * 8;
        if declared_bits > capacity_bits {
            warn!(
                declared_bytes = declared,
                capacity_bits, "rejected payload header"
            );
            return Err(CoreError::InvalidHeader(format!(
                "declares {declared} bytes but only {capacity_bits} payload bits are available"
            )));
        }

        let start = HEADER_BITS;
        let end = start + declared as usize * 8;
        Ok(pack_bits(lsb_bits(&lsbs[start..end])))
    }

    fn check_layout(&self, carrier: &Carrier) -> Result<()> {
        if carrier.layout() != self.layout {
            return Err(CoreError::UnsupportedImageLayout(format!(
                "carrier is {:?} but the embedder expects {:?}",
                carrier.layout(),
                self.layout
            )));
        }
        Ok(())
    }
}

fn lsb_bits(channels: &[u8]) -> impl Iterator<Item = u8> + '_ {
    channels.iter().map(|channel| channel & 1)
}
