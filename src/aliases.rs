// src/aliases.rs
//! Secret wrapper types used throughout stego-vault
//!
//! Plaintext and ciphertext buffers are secure-gate dynamic secrets, so they
//! zeroize on drop. The password type is the one aescrypt-rs consumes.

pub use aescrypt_rs::aliases::Password;
pub use secure_gate::dynamic_alias;

dynamic_alias!(PlainText, Vec<u8>); // UTF-8 secret text before encryption / after decryption
dynamic_alias!(CypherText, Vec<u8>); // AES Crypt v3 blob carried inside the image
