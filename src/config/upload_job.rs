use std::path::PathBuf;

use anyhow::Result;

use crate::accession::{destination_key, validate_accession_path};
use crate::cli::Args;

/// A validated, immutable description of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    /// Accession path relative to the filesystem prefix, as given
    pub relative_path: String,
    /// `<filesystem_prefix>/<relative_path>`
    pub accession_dir: PathBuf,
    /// `<bucket_path>/<relative_path>.tar.gz`
    pub object_key: String,
    pub compression_level: u8,
    pub overwrite: bool,
    pub debug: bool,
}

impl UploadJob {
    /// Validate the accession path and derive the source directory and
    /// destination key. Nothing outside the process is touched.
    pub fn new(
        bucket_path: &str,
        filesystem_prefix: &str,
        relative_path: &str,
        compression_level: u8,
        overwrite: bool,
        debug: bool,
    ) -> Result<Self> {
        validate_accession_path(relative_path)?;

        Ok(Self {
            relative_path: relative_path.to_string(),
            accession_dir: PathBuf::from(filesystem_prefix).join(relative_path),
            object_key: destination_key(bucket_path, relative_path),
            compression_level,
            overwrite,
            debug,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        Self::new(
            &args.bucket_path,
            &args.filesystem_prefix,
            &args.acc_dir_relative,
            args.compression_level,
            args.overwrite,
            args.debug,
        )
    }
}
