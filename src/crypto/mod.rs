// src/crypto/mod.rs
//! Pure cryptographic operations, no I/O and no images
//!
//! The secret text is sealed as an AES Crypt v3 stream: PBKDF2-SHA512 over
//! the password with a random 16-byte salt, a random session key, AES-256-CBC
//! and HMAC-SHA256. The iteration count is stored inside the blob, so only
//! the encrypting side needs to be configured.
mod decrypt;
mod encrypt;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;

use crate::aliases::{CypherText, Password, PlainText};
use crate::config::CipherConfig;
use crate::consts::{AESCRYPT_V3_HEADER, DEFAULT_KDF_ITERATIONS};
use crate::error::Result;

/// Password-based authenticated cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    kdf_iterations: u32,
}

impl Cipher {
    pub fn new(kdf_iterations: u32) -> Self {
        Self { kdf_iterations }
    }

    pub fn from_config(config: &CipherConfig) -> Self {
        Self::new(config.kdf_iterations)
    }

    pub fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations
    }

    pub fn encrypt(&self, plaintext: &PlainText, password: &Password) -> Result<CypherText> {
        encrypt_to_vec(plaintext, password, self.kdf_iterations)
    }

    pub fn decrypt(&self, ciphertext: &CypherText, password: &Password) -> Result<PlainText> {
        decrypt_to_vec(ciphertext, password)
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::new(DEFAULT_KDF_ITERATIONS)
    }
}

/// Check if data is an AES-Crypt blob (any version)
pub fn is_aescrypt_blob(data: &[u8]) -> bool {
    data.starts_with(b"AES")
}

/// Get AES-Crypt version from header, if valid
pub fn aescrypt_version(data: &[u8]) -> Option<u8> {
    if is_aescrypt_blob(data) {
        data.get(3).copied()
    } else {
        None
    }
}

pub(crate) fn is_aescrypt_v3(data: &[u8]) -> bool {
    data.get(..AESCRYPT_V3_HEADER.len()) == Some(AESCRYPT_V3_HEADER.as_slice())
}
