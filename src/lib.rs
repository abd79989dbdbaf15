//! # dicom-archiver
//!
//! Archive one DICOM accession directory into a gzip-compressed tarball and
//! upload it to object storage, skipping the upload when the stored checksum
//! already matches.
//!
//! ## Overview
//!
//! A run is a straight line of blocking steps:
//!
//! 1. Validate the accession path (`YYYY/MM/DD/<id>`)
//! 2. Probe the destination object with the store client's `stat`
//! 3. Scan the accession directory (flat, regular files, modality prefixes)
//! 4. Build the `.tar.gz` in memory with external `tar` + `gzip`
//! 5. Compare MD5 digests
//! 6. Upload with the store client's `pipe`, attaching
//!    `Content-MD5`, `Total-Count` and `Modalities`
//!
//! ## Usage
//!
//! ```no_run
//! use dicom_archiver::cloud::McClient;
//! use dicom_archiver::config::{ToolConfig, UploadJob};
//! use dicom_archiver::process::SystemRunner;
//! use dicom_archiver::uploader::run_upload;
//! use dicom_archiver::utils::compress::TarGzArchiver;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tools = ToolConfig::default();
//! let job = UploadJob::new("minio/dicom", "/mnt/pacs", "2024/01/15/ABC1", 9, true, false)?;
//!
//! let store = McClient::new(&tools.store_client, SystemRunner::new(false));
//! let archiver = TarGzArchiver::new(&tools.archiver, &tools.compressor, SystemRunner::new(false));
//!
//! let outcome = run_upload(&job, &store, &archiver)?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`config`]: Tool names and the validated job description
//! - [`accession`]: Accession path validation and directory scanning
//! - [`process`]: External program invocation
//! - [`cloud`]: Object store access through its CLI client
//! - [`utils`]: Archive creation and hashing
//! - [`uploader`]: The run itself
//! - [`models`]: Data passed between phases
//! - [`error`]: Failure classification and exit codes
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models passed between the phases of a run
pub mod models;

/// Tool configuration and the validated job description
pub mod config;

/// Accession path validation and directory scanning
pub mod accession;

/// Blocking external program invocation
pub mod process;

/// Object storage integration through the store's CLI client
pub mod cloud;

/// Utility functions for archiving and hashing
pub mod utils;

/// The archive-and-upload run
pub mod uploader;

/// Failure classification and exit codes
pub mod error;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
