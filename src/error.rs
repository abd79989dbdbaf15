//! Terminal failure classification and exit code mapping.
//!
//! Most functions return `anyhow::Result` and add context as they go. The
//! variants below are attached at the point where a run must stop, so that
//! `main` can recover the exit code from anywhere in the error chain.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::EXIT_FAILURE;

#[derive(Debug, Error)]
pub enum ArchiverError {
    #[error("Invalid format for acc_dir_relative: '{0}'")]
    InvalidAccessionPath(String),

    #[error("Encountered a directory {}", .0.display())]
    NotARegularFile(PathBuf),

    #[error("Unexpected modality prefix on file {}", .0.display())]
    BadModalityPrefix(PathBuf),

    #[error("No files found in {}", .0.display())]
    NoFilesFound(PathBuf),

    #[error("Object '{key}' exists but its metadata has no {field} entry")]
    MissingStoredDigest { key: String, field: &'static str },

    #[error("MD5 {computed} did not match existing {} for {}", .existing.as_deref().unwrap_or("None"), .dir.display())]
    ChecksumMismatch {
        computed: String,
        existing: Option<String>,
        dir: PathBuf,
    },

    #[error("{program} exited with {}", describe_status(.code))]
    ExternalCommand { program: String, code: Option<i32> },
}

impl ArchiverError {
    /// Process exit code for this failure.
    ///
    /// External tools propagate their own status; a tool killed by a signal
    /// has no code and maps to the generic failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ArchiverError::ExternalCommand { code, .. } => code
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(EXIT_FAILURE),
            _ => EXIT_FAILURE,
        }
    }
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

/// Find the exit code for an error, looking through its whole context chain.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ArchiverError>())
        .map(ArchiverError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
