// tests/common.rs
//! Shared test utilities: logging setup and synthetic carriers

#![allow(dead_code)] // each test crate uses a different subset

use rand::RngCore;
use stego_vault::{Carrier, ChannelLayout, Cipher, Concealer, Embedder, Password};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Low iteration count keeps the suite fast; the count travels in the blob.
pub const TEST_KDF_ITERATIONS: u32 = 1_000;

/// Initialize test-friendly logging. Call once at the start of any test that needs logs.
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

pub fn password(pwd: &str) -> Password {
    Password::new(pwd.to_owned())
}

pub fn test_cipher() -> Cipher {
    Cipher::new(TEST_KDF_ITERATIONS)
}

pub fn test_concealer(layout: ChannelLayout) -> Concealer {
    Concealer::new(test_cipher(), Embedder::new(layout))
}

/// Carrier filled with random noise
pub fn noise_carrier(width: u32, height: u32, layout: ChannelLayout) -> Carrier {
    let mut bytes = vec![0u8; width as usize * height as usize * layout.channels()];
    rand::rng().fill_bytes(&mut bytes);
    Carrier::from_raw(width, height, layout, bytes).unwrap()
}

/// Carrier where every channel byte has the same value
pub fn flat_carrier(width: u32, height: u32, layout: ChannelLayout, value: u8) -> Carrier {
    let bytes = vec![value; width as usize * height as usize * layout.channels()];
    Carrier::from_raw(width, height, layout, bytes).unwrap()
}

/// Horizontal gradient PNG, as a cover image file would arrive from storage
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7) as u8, (y * 13) as u8, ((x + y) * 3) as u8])
    });
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut out, image::ImageOutputFormat::Png)
        .unwrap();
    out.into_inner()
}

/// Smallest square carrier side whose capacity holds `payload_bytes`
pub fn side_for(payload_bytes: usize, layout: ChannelLayout) -> u32 {
    let bits = payload_bytes * 8 + 32;
    let pixels = bits.div_ceil(layout.channels());
    (pixels as f64).sqrt().ceil() as u32
}
