use std::collections::BTreeSet;

use crate::constants::{ATTR_CONTENT_MD5, ATTR_MODALITIES, ATTR_TOTAL_COUNT};

/// What the store already holds at the destination key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObjectInfo {
    pub content_md5: String,
}

/// Outcome of scanning an accession directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryScanResult {
    pub file_count: usize,
    pub modalities: BTreeSet<String>,
}

/// Compressed tarball held in memory together with its digest.
#[derive(Debug, Clone)]
pub struct ArchivePayload {
    pub data: Vec<u8>,
    pub md5: String,
}

/// Metadata attached to the uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAttributes {
    pub content_md5: String,
    pub total_count: usize,
    pub modalities: Vec<String>,
}

impl UploadAttributes {
    pub fn new(payload: &ArchivePayload, scan: &DirectoryScanResult) -> Self {
        Self {
            content_md5: payload.md5.clone(),
            total_count: scan.file_count,
            // BTreeSet iterates in sorted order
            modalities: scan.modalities.iter().cloned().collect(),
        }
    }

    /// Render as the `k=v;k=v` string the object-store client takes for `--attr`.
    pub fn to_attr_string(&self) -> String {
        [
            (ATTR_CONTENT_MD5, self.content_md5.clone()),
            (ATTR_TOTAL_COUNT, self.total_count.to_string()),
            (ATTR_MODALITIES, self.modalities.join(",")),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(";")
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The stored digest matched the fresh archive; nothing was uploaded.
    UpToDate { md5: String },
    /// The archive was piped to the store.
    Uploaded { key: String, attributes: UploadAttributes },
}
