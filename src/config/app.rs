// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::enums::ChannelLayout;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cipher: CipherConfig,
    pub embedding: EmbeddingConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CipherConfig {
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbeddingConfig {
    pub layout: ChannelLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
    #[serde(default = "default_output_bucket")]
    pub output_bucket: String,
    #[serde(default = "default_concealed_prefix")]
    pub concealed_prefix: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            kdf_iterations: default_kdf_iterations(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
            output_bucket: default_output_bucket(),
            concealed_prefix: default_concealed_prefix(),
        }
    }
}

impl Config {
    /// Load from `$STEGO_CONFIG` (or `stego-config.toml`), falling back to
    /// built-in defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("STEGO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let conf = if Path::new(&config_path).exists() {
            Self::read_file(&config_path)?
        } else {
            warn!(path = %config_path, "config file not found, using built-in defaults");
            Self::default()
        };

        conf.with_env_overrides().validated()
    }

    /// Load from an explicit path; the file must exist.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_file(path)?.with_env_overrides().validated()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validated()
    }

    fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(root) = std::env::var("STEGO_STORAGE_ROOT") {
            self.storage.root = PathBuf::from(root);
        }
        self
    }

    fn validated(self) -> Result<Self> {
        if self.cipher.kdf_iterations == 0 {
            return Err(CoreError::Config(
                "cipher.kdf_iterations must be at least 1".into(),
            ));
        }
        if self.storage.output_bucket.is_empty() || self.storage.output_bucket.contains('/') {
            return Err(CoreError::Config(format!(
                "storage.output_bucket {:?} is not a bucket name",
                self.storage.output_bucket
            )));
        }
        if self.storage.concealed_prefix.contains('/') {
            return Err(CoreError::Config(
                "storage.concealed_prefix must not contain '/'".into(),
            ));
        }
        Ok(self)
    }
}
