//! Global constants for the dicom-archiver application.
//!
//! This module centralizes the external tool names, object metadata keys and
//! exit codes so the wire-visible values live in one place.

// External tools
/// Object-store client used for `stat` and `pipe`
pub const DEFAULT_STORE_CLIENT: &str = "mc";

/// Archiver that streams a tarball to stdout
pub const DEFAULT_ARCHIVER: &str = "tar";

/// Compressor handed to the archiver via `--use-compress-program`
pub const DEFAULT_COMPRESSOR: &str = "/usr/bin/gzip";

// Compression
/// Default gzip compression level
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 9;

/// Highest compression level gzip accepts
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

// Object naming and metadata
/// Suffix appended to the accession path to form the object key
pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

/// Vendor metadata field on `stat --json` output carrying the stored digest
pub const STORED_MD5_METADATA_KEY: &str = "X-Amz-Meta-Content-Md5";

/// Attribute names attached on upload, in wire order
pub const ATTR_CONTENT_MD5: &str = "Content-MD5";
pub const ATTR_TOTAL_COUNT: &str = "Total-Count";
pub const ATTR_MODALITIES: &str = "Modalities";

// Accession directory layout
/// Accepted shape of the accession path relative to the filesystem prefix
pub const ACCESSION_PATH_PATTERN: &str = r"^\d{4}/\d{2}/\d{2}/\w*/?$";

/// Minimum and maximum modality prefix length, in characters
pub const MIN_MODALITY_LEN: usize = 2;
pub const MAX_MODALITY_LEN: usize = 3;

// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
