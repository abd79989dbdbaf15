//! Path shape validation for accession directories.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{ACCESSION_PATH_PATTERN, ARCHIVE_SUFFIX};
use crate::error::ArchiverError;

lazy_static! {
    /// `YYYY/MM/DD/<id>` with an optional trailing slash. Digit groups are
    /// checked for shape only, never for calendar validity.
    static ref ACCESSION_PATH: Regex = Regex::new(ACCESSION_PATH_PATTERN).unwrap();
}

/// Check that `relative` looks like `YYYY/MM/DD/<word chars>[/]`.
///
/// # Examples
///
/// ```
/// use dicom_archiver::accession::validate_accession_path;
///
/// assert!(validate_accession_path("2024/01/15/ABC1").is_ok());
/// assert!(validate_accession_path("2024/1/15/ABC1").is_err());
/// ```
pub fn validate_accession_path(relative: &str) -> Result<()> {
    if ACCESSION_PATH.is_match(relative) {
        Ok(())
    } else {
        Err(ArchiverError::InvalidAccessionPath(relative.to_string()).into())
    }
}

/// Join two `/`-separated key segments the way POSIX path joining does.
///
/// An empty base yields `rel` unchanged, a base that already ends in `/` is
/// concatenated directly, and an absolute `rel` replaces the base.
pub fn join_key(base: &str, rel: &str) -> String {
    if base.is_empty() || rel.starts_with('/') {
        rel.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, rel)
    } else {
        format!("{}/{}", base, rel)
    }
}

/// Object key the archive for `relative` is stored under.
///
/// A trailing slash on `relative` is kept, so `2024/01/15/X/` maps to
/// `<bucket>/2024/01/15/X/.tar.gz`.
pub fn destination_key(bucket_path: &str, relative: &str) -> String {
    format!("{}{}", join_key(bucket_path, relative), ARCHIVE_SUFFIX)
}
