// src/container.rs
//! Image file ↔ carrier conversion
//!
//! Any format the `image` crate can read is accepted as a cover. Output is
//! always PNG: a lossy re-encode would wipe the embedded LSBs.

use std::io::Cursor;

use image::ImageOutputFormat;

use crate::embed::Carrier;
use crate::enums::ChannelLayout;
use crate::error::Result;

/// Decode image file bytes into a carrier with the given layout
///
/// Corrupt or unrecognised file bytes fail with
/// [`CoreError::Image`](crate::CoreError::Image). A file that decodes but has
/// a colour type the layout cannot hold (16-bit, float, or alpha into `Rgb8`)
/// fails with
/// [`CoreError::UnsupportedImageLayout`](crate::CoreError::UnsupportedImageLayout).
pub fn decode(bytes: &[u8], layout: ChannelLayout) -> Result<Carrier> {
    let image = image::load_from_memory(bytes)?;
    Carrier::from_image(image, layout)
}

/// Encode a carrier as PNG file bytes
pub fn encode_png(carrier: &Carrier) -> Result<Vec<u8>> {
    let image = carrier.to_image()?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageOutputFormat::Png)?;
    Ok(out.into_inner())
}
