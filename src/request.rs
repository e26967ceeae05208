// src/request.rs
//! Request and response shapes exchanged with the outer handlers

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Hide `secret_text` in the image at `image_path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcealRequest {
    pub image_path: String,
    pub secret_text: String,
    pub secret_password_key: String,
}

/// Recover the secret text hidden in the image at `image_path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRequest {
    pub image_path: String,
    pub secret_password_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResponse {
    pub secret_text: String,
}

/// Queue delivery envelope: each record carries a JSON message as a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEvent {
    #[serde(rename = "Records")]
    pub records: Vec<QueueRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueRecord {
    pub body: String,
}

impl QueueEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wrap a single message body into an event
    pub fn single<T: Serialize>(message: &T) -> Result<Self> {
        Ok(Self {
            records: vec![QueueRecord {
                body: serde_json::to_string(message)?,
            }],
        })
    }

    /// Decode the body of the first record; later records are ignored.
    pub fn first_message<T: DeserializeOwned>(&self) -> Result<T> {
        let record = self
            .records
            .first()
            .ok_or_else(|| CoreError::MalformedRequest("queue event has no records".into()))?;
        Ok(serde_json::from_str(&record.body)?)
    }
}
