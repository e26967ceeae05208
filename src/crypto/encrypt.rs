// src/crypto/encrypt.rs
use crate::aliases::{CypherText, Password, PlainText};
use crate::error::CoreError;
use aescrypt_rs::encrypt;
use std::io::Cursor;

/// Encrypt plaintext → AES-Crypt v3 blob (in-memory)
///
/// Every call draws a fresh public IV (the KDF salt) and session key, so two
/// encryptions of the same text under the same password never match.
pub fn encrypt_to_vec(
    plaintext: &PlainText,
    password: &Password,
    kdf_iterations: u32,
) -> Result<CypherText, CoreError> {
    let mut out = Vec::new();
    encrypt(
        Cursor::new(plaintext.expose_secret().as_slice()),
        &mut out,
        password,
        kdf_iterations,
    )
    .map_err(CoreError::Crypto)?;
    Ok(CypherText::new(out))
}
