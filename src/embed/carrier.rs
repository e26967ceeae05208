// src/embed/carrier.rs
use image::{ColorType, DynamicImage, GenericImageView, RgbImage, RgbaImage};

use crate::enums::ChannelLayout;
use crate::error::{CoreError, Result};

/// A decoded raster normalised to one [`ChannelLayout`].
///
/// Channel bytes are stored row-major with the channels of each pixel
/// interleaved, which is also the order payload bits are written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    channels: Vec<u8>,
}

impl Carrier {
    /// Wrap raw channel bytes, checking they match `width × height × channels`.
    pub fn from_raw(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        channels: Vec<u8>,
    ) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(layout.channels()))
            .ok_or_else(|| {
                CoreError::UnsupportedImageLayout(format!("{width}x{height} raster is too large"))
            })?;

        if channels.len() != expected {
            return Err(CoreError::UnsupportedImageLayout(format!(
                "{width}x{height} {layout:?} raster needs {expected} bytes, got {}",
                channels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            channels,
        })
    }

    /// Normalise a decoded image into `layout`.
    ///
    /// Only 8-bit sources are accepted. A source with alpha cannot be
    /// normalised to [`ChannelLayout::Rgb8`] since the alpha would be lost.
    pub fn from_image(image: DynamicImage, layout: ChannelLayout) -> Result<Self> {
        let color = image.color();
        match color {
            ColorType::L8 | ColorType::Rgb8 => {}
            ColorType::La8 | ColorType::Rgba8 if layout.has_alpha() => {}
            ColorType::La8 | ColorType::Rgba8 => {
                return Err(CoreError::UnsupportedImageLayout(format!(
                    "{color:?} source would lose its alpha channel in {layout:?}"
                )))
            }
            other => {
                return Err(CoreError::UnsupportedImageLayout(format!(
                    "{other:?} is not an 8-bit channel format"
                )))
            }
        }

        let (width, height) = image.dimensions();
        let channels = match layout {
            ChannelLayout::Rgb8 => image.into_rgb8().into_raw(),
            ChannelLayout::Rgba8 => image.into_rgba8().into_raw(),
        };
        Self::from_raw(width, height, layout, channels)
    }

    /// Rebuild an `image` raster from the channel bytes.
    pub fn to_image(&self) -> Result<DynamicImage> {
        let (width, height) = (self.width, self.height);
        let raw = self.channels.clone();
        let image = match self.layout {
            ChannelLayout::Rgb8 => RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
            ChannelLayout::Rgba8 => {
                RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8)
            }
        };
        image.ok_or_else(|| {
            CoreError::UnsupportedImageLayout(format!(
                "{width}x{height} {:?} buffer does not match its dimensions",
                self.layout
            ))
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of channel bytes, i.e. LSBs available before the header is reserved
    pub fn lsb_count(&self) -> u64 {
        self.pixel_count() * self.layout.channels() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.channels
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.channels
    }
}
