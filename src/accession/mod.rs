//! Accession directory handling.
//!
//! An accession directory holds one imaging study and lives at
//! `<filesystem_prefix>/YYYY/MM/DD/<id>`. Every file in it is named with a
//! modality prefix (`CT.1.dcm`, `MR.2.dcm`, ...). This module checks the shape
//! of the relative path and the contents of the directory before anything
//! expensive runs.

/// Relative path validation and destination key construction
pub mod path;

/// Flat directory scan collecting file count and modalities
pub mod scan;

pub use path::{destination_key, join_key, validate_accession_path};
pub use scan::{modality_of, scan_accession_dir};
