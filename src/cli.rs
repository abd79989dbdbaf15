use clap::Parser;

use crate::constants::{DEFAULT_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL};

/// Command-line arguments for the dicom-archiver tool.
///
/// The option names keep their underscore spelling (`--compression_level`)
/// because existing cron jobs and wrappers invoke the tool with it.
#[derive(Parser, Debug)]
#[clap(
    name = "dicom-archiver",
    about = "Archive a DICOM accession directory and upload it to object storage"
)]
pub struct Args {
    /// Bucket path for the object
    pub bucket_path: String,

    /// Prefix of the filesystem containing the accession directory.
    /// Will be stripped from the destination path
    pub filesystem_prefix: String,

    /// Relative path to the accession directory to upload
    pub acc_dir_relative: String,

    /// Compression level for gzip
    #[clap(
        long = "compression_level",
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(u8).range(0..=MAX_COMPRESSION_LEVEL as i64)
    )]
    pub compression_level: u8,

    /// Overwrite the object if it already exists
    #[clap(long)]
    pub overwrite: bool,

    /// Enable debug logging
    #[clap(long)]
    pub debug: bool,
}
