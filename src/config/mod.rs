// src/config/mod.rs
//! Configuration system for stego-vault
//!
//! TOML file + env overrides, loaded into a plain value that callers pass
//! around explicitly. Nothing is cached process-wide.

pub use app::{CipherConfig, Config, EmbeddingConfig, StorageConfig};

mod app;
mod defaults;
