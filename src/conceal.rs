// src/conceal.rs
//! Concealment pipeline: cipher, embedder and PNG container in sequence

use tracing::debug;

use crate::aliases::{CypherText, Password, PlainText};
use crate::config::Config;
use crate::container;
use crate::crypto::Cipher;
use crate::embed::{Carrier, Embedder};
use crate::error::Result;

/// Hides password-encrypted text in images and recovers it.
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concealer {
    cipher: Cipher,
    embedder: Embedder,
}

impl Concealer {
    pub fn new(cipher: Cipher, embedder: Embedder) -> Self {
        Self { cipher, embedder }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Cipher::from_config(&config.cipher),
            Embedder::from_config(&config.embedding),
        )
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    pub fn embedder(&self) -> &Embedder {
        &self.embedder
    }

    /// plaintext → encrypt → embed
    pub fn conceal_carrier(
        &self,
        carrier: &Carrier,
        secret_text: &str,
        password: &Password,
    ) -> Result<Carrier> {
        let plaintext = PlainText::new(secret_text.as_bytes().to_vec());
        let ciphertext = self.cipher.encrypt(&plaintext, password)?;
        debug!(
            blob_len = ciphertext.expose_secret().len(),
            "secret text encrypted"
        );
        self.embedder.embed(carrier, ciphertext.expose_secret())
    }

    /// extract → decrypt → UTF-8 text
    pub fn reveal_carrier(&self, carrier: &Carrier, password: &Password) -> Result<String> {
        let ciphertext = CypherText::new(self.embedder.extract(carrier)?);
        let plaintext = self.cipher.decrypt(&ciphertext, password)?;
        let text = std::str::from_utf8(plaintext.expose_secret())?;
        Ok(text.to_owned())
    }

    /// Conceal `secret_text` in an encoded cover image, returning PNG bytes.
    pub fn conceal(
        &self,
        image_bytes: &[u8],
        secret_text: &str,
        password: &Password,
    ) -> Result<Vec<u8>> {
        let carrier = container::decode(image_bytes, self.embedder.layout())?;
        let concealed = self.conceal_carrier(&carrier, secret_text, password)?;
        container::encode_png(&concealed)
    }

    /// Recover the secret text from an encoded concealed image.
    pub fn reveal(&self, image_bytes: &[u8], password: &Password) -> Result<String> {
        let carrier = container::decode(image_bytes, self.embedder.layout())?;
        self.reveal_carrier(&carrier, password)
    }
}
