// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible protocol choices.

use serde::{Deserialize, Serialize};

/// Channel layout every carrier is normalised to before embedding
///
/// Embedding and extraction must use the same layout; it is never inferred
/// from the image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ChannelLayout {
    /// Red, green, blue: 3 bytes per pixel
    Rgb8,
    /// Red, green, blue, alpha: 4 bytes per pixel
    #[default]
    Rgba8,
}

impl ChannelLayout {
    /// Number of 8-bit channels per pixel
    pub const fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb8 => 3,
            ChannelLayout::Rgba8 => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba8)
    }
}
