// tests/config_tests.rs
use std::path::PathBuf;

use stego_vault::consts::DEFAULT_KDF_ITERATIONS;
use stego_vault::{ChannelLayout, Concealer, Config, CoreError};
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.cipher.kdf_iterations, DEFAULT_KDF_ITERATIONS);
    assert_eq!(config.embedding.layout, ChannelLayout::Rgba8);
    assert_eq!(config.storage.root, PathBuf::from("data"));
    assert_eq!(config.storage.output_bucket, "images");
    assert_eq!(config.storage.concealed_prefix, "concealed_");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
        [embedding]
        layout = "rgb8"
        "#,
    )
    .unwrap();

    assert_eq!(config.embedding.layout, ChannelLayout::Rgb8);
    assert_eq!(config.cipher.kdf_iterations, DEFAULT_KDF_ITERATIONS);
    assert_eq!(config.storage.output_bucket, "images");

    let concealer = Concealer::from_config(&config);
    assert_eq!(concealer.embedder().layout(), ChannelLayout::Rgb8);
    assert_eq!(concealer.cipher().kdf_iterations(), DEFAULT_KDF_ITERATIONS);
}

#[test]
fn test_full_toml() {
    let config = Config::from_toml_str(
        r#"
        [cipher]
        kdf_iterations = 1000

        [embedding]
        layout = "rgba8"

        [storage]
        root = "/var/lib/stego"
        output_bucket = "concealed"
        concealed_prefix = "hidden_"
        "#,
    )
    .unwrap();

    assert_eq!(config.cipher.kdf_iterations, 1000);
    assert_eq!(config.storage.root, PathBuf::from("/var/lib/stego"));
    assert_eq!(config.storage.output_bucket, "concealed");
    assert_eq!(config.storage.concealed_prefix, "hidden_");
}

#[test]
fn test_invalid_values_are_rejected() {
    for toml in [
        "[cipher]\nkdf_iterations = 0",
        "[embedding]\nlayout = \"cmyk\"",
        "[storage]\noutput_bucket = \"a/b\"",
        "[storage]\nconcealed_prefix = \"x/\"",
        "[unknown]\nkey = 1",
    ] {
        assert!(
            matches!(Config::from_toml_str(toml), Err(CoreError::Config(_))),
            "{toml:?} should be rejected"
        );
    }
}

#[test]
fn test_from_path_reads_file_and_missing_file_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stego-config.toml");
    std::fs::write(&path, "[cipher]\nkdf_iterations = 42\n").unwrap();

    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.cipher.kdf_iterations, 42);

    assert!(matches!(
        Config::from_path(dir.path().join("missing.toml")),
        Err(CoreError::Io(_))
    ));
}

// Environment variables are process-global, so every env-driven case lives in
// this one test.
#[test]
fn test_load_honours_environment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stego-config.toml");
    std::fs::write(
        &path,
        "[cipher]\nkdf_iterations = 42\n\n[storage]\nroot = \"from-file\"\n",
    )
    .unwrap();
    let override_root = dir.path().join("override");

    std::env::remove_var("STEGO_STORAGE_ROOT");

    std::env::set_var("STEGO_CONFIG", dir.path().join("missing.toml"));
    assert_eq!(Config::load().unwrap(), Config::default());

    std::env::set_var("STEGO_CONFIG", &path);
    let config = Config::load().unwrap();
    assert_eq!(config.cipher.kdf_iterations, 42);
    assert_eq!(config.storage.root, PathBuf::from("from-file"));

    std::env::set_var("STEGO_STORAGE_ROOT", &override_root);
    let config = Config::load().unwrap();
    assert_eq!(config.cipher.kdf_iterations, 42);
    assert_eq!(config.storage.root, override_root);

    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.storage.root, override_root);

    std::env::set_var("STEGO_CONFIG", dir.path().join("missing.toml"));
    let config = Config::load().unwrap();
    assert_eq!(config.storage.root, override_root);
    assert_eq!(config.cipher, Config::default().cipher);

    std::env::remove_var("STEGO_CONFIG");
    std::env::remove_var("STEGO_STORAGE_ROOT");
}
