//! Utility functions for archive creation and hashing.
//!
//! ## Components
//!
//! - **Compression**: tar + gzip archive of an accession directory, held in memory
//! - **Hashing**: MD5 digest of the compressed archive for change detection
//!
//! ### Archiving a directory
//!
//! ```no_run
//! use dicom_archiver::process::SystemRunner;
//! use dicom_archiver::utils::compress::{Archiver, TarGzArchiver};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let archiver = TarGzArchiver::new("tar", "/usr/bin/gzip", SystemRunner::new(false));
//! let payload = archiver.archive(Path::new("/mnt/pacs/2024/01/15/ABC1"), 9)?;
//! println!("{} bytes, md5 {}", payload.data.len(), payload.md5);
//! # Ok(())
//! # }
//! ```

/// tar + gzip archiving through external tools
pub mod compress;

/// Digest calculation utilities
pub mod hash;
