// src/lib.rs
//! stego-vault: password-encrypted text hidden in image pixel LSBs
//!
//! Features:
//! - AES Crypt v3 encryption (PBKDF2-SHA512 + AES-256-CBC + HMAC-SHA256)
//! - 32-bit length-framed LSB embedding, row-major, MSB-first
//! - Lossless PNG container round-trip
//! - Object-store + queue-event handlers around the codec

pub mod aliases;
pub mod config;
pub mod consts;
pub mod container;
pub mod crypto;
pub mod embed;
pub mod enums;
pub mod frame;
pub mod handler;
pub mod request;
pub mod storage;

mod conceal;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{CypherText, Password, PlainText};
pub use conceal::Concealer;
pub use config::Config;
pub use crypto::Cipher;
pub use embed::{Carrier, Embedder};
pub use enums::ChannelLayout;
pub use error::{CoreError, Result};
pub use handler::Handler;
pub use request::{ConcealRequest, QueueEvent, RevealRequest, RevealResponse};
pub use storage::{FsObjectStore, ObjectLocation, ObjectStore};
