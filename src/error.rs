// src/error.rs
//! Public error type for the entire crate

use aescrypt_rs::AescryptError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Payload needs {required_bits} LSBs (header included) but the image only has {available_bits}")]
    CapacityExceeded {
        required_bits: u64,
        available_bits: u64,
    },

    #[error("Invalid payload header: {0}")]
    InvalidHeader(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Unsupported image layout: {0}")]
    UnsupportedImageLayout(String),

    #[error("Crypto operation failed: {0}")]
    Crypto(AescryptError),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Recovered secret is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Storage error at {location}: {source}")]
    Storage {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AescryptError> for CoreError {
    fn from(err: AescryptError) -> Self {
        CoreError::Crypto(err)
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}
