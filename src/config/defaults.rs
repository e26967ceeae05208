// src/config/defaults.rs
use std::path::PathBuf;

use crate::consts::{
    DEFAULT_CONCEALED_PREFIX, DEFAULT_KDF_ITERATIONS, DEFAULT_OUTPUT_BUCKET, DEFAULT_STORAGE_ROOT,
};

pub fn default_kdf_iterations() -> u32 {
    DEFAULT_KDF_ITERATIONS
}

pub fn default_storage_root() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_ROOT)
}

pub fn default_output_bucket() -> String {
    DEFAULT_OUTPUT_BUCKET.into()
}

pub fn default_concealed_prefix() -> String {
    DEFAULT_CONCEALED_PREFIX.into()
}
