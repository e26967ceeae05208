// src/handler.rs
//! Request handlers: fetch from storage, run the codec, persist the result
//!
//! Mirrors the two entry points of the service: concealment requests arrive
//! wrapped in a queue event, recovery requests arrive directly.

use std::path::Path;

use tracing::info;

use crate::aliases::Password;
use crate::conceal::Concealer;
use crate::config::Config;
use crate::error::Result;
use crate::request::{ConcealRequest, QueueEvent, RevealRequest, RevealResponse};
use crate::storage::{ObjectLocation, ObjectStore};

#[derive(Debug, Clone)]
pub struct Handler<S> {
    store: S,
    config: Config,
    concealer: Concealer,
}

impl<S: ObjectStore> Handler<S> {
    pub fn new(store: S, config: Config) -> Self {
        let concealer = Concealer::from_config(&config);
        Self {
            store,
            config,
            concealer,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Conceal the secret from the first queued message; returns where the
    /// concealed image was written.
    pub fn conceal_image_with_secret_text(&self, event: &QueueEvent) -> Result<ObjectLocation> {
        let request: ConcealRequest = event.first_message()?;
        let output = self.conceal(&request)?;
        info!(%output, "uploaded the concealed image");
        Ok(output)
    }

    pub fn conceal(&self, request: &ConcealRequest) -> Result<ObjectLocation> {
        let input = ObjectLocation::parse(&request.image_path)?;
        let output = self.concealed_location(&input);

        let cover = self.store.fetch(&input)?;
        info!(image = input.file_name(), "concealing image with the secret message");

        let password = Password::new(request.secret_password_key.clone());
        let concealed = self
            .concealer
            .conceal(&cover, &request.secret_text, &password)?;

        self.store.persist(&output, &concealed)?;
        Ok(output)
    }

    pub fn get_secret_text_from_concealed_image(
        &self,
        request: &RevealRequest,
    ) -> Result<RevealResponse> {
        let location = ObjectLocation::parse(&request.image_path)?;
        let concealed = self.store.fetch(&location)?;

        let password = Password::new(request.secret_password_key.clone());
        let secret_text = self.concealer.reveal(&concealed, &password)?;

        info!(
            %location,
            secret_len = secret_text.len(),
            "secret text retrieved"
        );
        Ok(RevealResponse { secret_text })
    }

    /// `s3://<output_bucket>/<prefix><stem>.png`; output is always PNG
    pub fn concealed_location(&self, input: &ObjectLocation) -> ObjectLocation {
        let stem = Path::new(input.file_name())
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        ObjectLocation::new(
            self.config.storage.output_bucket.as_str(),
            format!("{}{stem}.png", self.config.storage.concealed_prefix),
        )
    }
}
