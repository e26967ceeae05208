// src/consts.rs
//! Shared constants: protocol parameters and defaults

/// PBKDF2-SHA512 iterations used for password-derived keys
// 600_000 ≈ 0.5–1 second on typical CPU
pub const DEFAULT_KDF_ITERATIONS: u32 = 600_000;

/// Width of the length prefix written before every embedded payload
pub const HEADER_BITS: usize = 32;

/// Header magic for AES-Crypt v3 blobs
pub const AESCRYPT_V3_HEADER: &[u8; 5] = b"AES\x03\x00";

/// Scheme prefix of object locations
pub const LOCATION_SCHEME: &str = "s3://";

/// Default bucket concealed images are written to
pub const DEFAULT_OUTPUT_BUCKET: &str = "images";

/// Prefix prepended to the file name of every concealed image
pub const DEFAULT_CONCEALED_PREFIX: &str = "concealed_";

/// Default local directory backing the filesystem object store
pub const DEFAULT_STORAGE_ROOT: &str = "data";

/// Config file looked up when `STEGO_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "stego-config.toml";
