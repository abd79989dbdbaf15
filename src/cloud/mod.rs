//! Object storage integration.
//!
//! The store is only ever reached through its command-line client; this crate
//! never speaks the storage protocol itself. Two operations are needed:
//!
//! - **stat**: does an object exist at a key, and what digest was stored with it
//! - **pipe**: write an object from an in-memory body with attached metadata
//!
//! ```text
//! ┌──────────┐  stat --json <key>            ┌───────────┐
//! │ Uploader │──────────────────────────────▶│ mc client │──▶ object store
//! │          │  pipe --quiet --attr .. <key> │           │
//! └──────────┘──────────────────────────────▶└───────────┘
//! ```
//!
//! [`ObjectStore`] is the seam tests substitute; [`McClient`] is the real
//! implementation over a [`CommandRunner`](crate::process::CommandRunner).

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::STORED_MD5_METADATA_KEY;
use crate::models::UploadAttributes;

/// MinIO client (`mc`) backed store
pub mod minio;

pub use minio::McClient;

/// Raw answer of a `stat` probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatResponse {
    /// The client reported success, i.e. the object exists
    pub exists: bool,
    /// Structured output exactly as the client printed it
    pub body: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct StatBody {
    #[serde(default)]
    metadata: HashMap<String, serde_json::Value>,
}

impl StatResponse {
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_slice(&self.body).context("Failed to parse stat response as JSON")
    }

    /// Digest recorded in the object's vendor metadata, if any.
    pub fn stored_md5(&self) -> Result<Option<String>> {
        let body: StatBody =
            serde_json::from_slice(&self.body).context("Failed to parse stat response as JSON")?;

        Ok(body
            .metadata
            .get(STORED_MD5_METADATA_KEY)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }
}

/// Operations the uploader needs from object storage.
pub trait ObjectStore {
    /// Probe `key`. A missing object is a normal response, not an error.
    fn stat(&self, key: &str) -> Result<StatResponse>;

    /// Store `body` at `key` with `attributes` attached as object metadata.
    fn pipe(&self, key: &str, attributes: &UploadAttributes, body: &[u8]) -> Result<()>;
}
