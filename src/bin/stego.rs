// src/bin/stego.rs
//! stego: conceal / reveal secret text in images kept in a local object store

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rpassword::read_password;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stego_vault::{
    ConcealRequest, Config, FsObjectStore, Handler, QueueEvent, RevealRequest,
};

#[derive(Debug, Parser)]
#[command(name = "stego", version, about = "Hide password-encrypted text inside images")]
struct Cli {
    /// Config file (defaults to $STEGO_CONFIG or stego-config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Conceal secret text in an image and store the result as PNG
    Conceal {
        /// Queue event JSON file (`{"Records": [{"body": "..."}]}`)
        #[arg(long, conflicts_with_all = ["image", "text", "password"])]
        event: Option<PathBuf>,

        /// Input image location, e.g. s3://images/cover.png
        #[arg(long, requires = "text")]
        image: Option<String>,

        /// Secret text to hide
        #[arg(long)]
        text: Option<String>,

        /// Password key (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Recover the secret text from a concealed image
    Reveal {
        /// Concealed image location, e.g. s3://images/concealed_cover.png
        #[arg(long)]
        image: String,

        /// Password key (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    info!(root = %config.storage.root.display(), "using filesystem object store");

    let handler = Handler::new(FsObjectStore::new(config.storage.root.clone()), config);

    match cli.command {
        Command::Conceal {
            event: Some(event_path),
            ..
        } => {
            let json = std::fs::read_to_string(&event_path)
                .with_context(|| format!("Failed to read {}", event_path.display()))?;
            let event = QueueEvent::from_json(&json).context("Invalid queue event")?;
            let output = handler
                .conceal_image_with_secret_text(&event)
                .context("Concealment failed")?;
            println!("{output}");
        }
        Command::Conceal {
            event: None,
            image: Some(image_path),
            text: Some(secret_text),
            password,
        } => {
            let secret_password_key = match password {
                Some(pwd) => pwd,
                None => prompt_password(&format!("Password for {image_path}: "))?,
            };
            let request = ConcealRequest {
                image_path,
                secret_text,
                secret_password_key,
            };
            let output = handler.conceal(&request).context("Concealment failed")?;
            println!("{output}");
        }
        Command::Conceal { .. } => bail!("conceal needs either --event or --image with --text"),
        Command::Reveal { image, password } => {
            let secret_password_key = match password {
                Some(pwd) => pwd,
                None => prompt_password(&format!("Password for {image}: "))?,
            };
            let request = RevealRequest {
                image_path: image,
                secret_password_key,
            };
            let response = handler
                .get_secret_text_from_concealed_image(&request)
                .context("Recovery failed (wrong password or not a concealed image?)")?;
            println!("{}", serde_json::to_string(&response)?);
        }
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let input = read_password()?;
    Ok(input.trim_end().to_owned())
}
