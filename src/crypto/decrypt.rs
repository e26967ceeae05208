// src/crypto/decrypt.rs
use crate::aliases::{CypherText, Password, PlainText};
use crate::error::CoreError;
use aescrypt_rs::decrypt;
use std::io::Cursor;
use tracing::debug;
use zeroize::Zeroize;

use super::is_aescrypt_v3;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Decrypt an AES-Crypt v3 blob → plaintext (in-memory)
///
/// Both HMACs are verified. On any failure the partially written output is
/// wiped and only `CoreError::Decryption` escapes.
pub fn decrypt_to_vec(ciphertext: &CypherText, password: &Password) -> Result<PlainText> {
    let blob = ciphertext.expose_secret();
    if !is_aescrypt_v3(blob) {
        return Err(CoreError::Decryption(
            "payload is not an AES-Crypt v3 blob".into(),
        ));
    }

    let mut out = Vec::new();
    if let Err(err) = decrypt(Cursor::new(blob.as_slice()), &mut out, password) {
        out.zeroize();
        debug!(blob_len = blob.len(), "AES-Crypt decryption rejected");
        return Err(CoreError::Decryption(err.to_string()));
    }
    Ok(PlainText::new(out))
}
