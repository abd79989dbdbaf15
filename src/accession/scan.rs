use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::constants::{MAX_MODALITY_LEN, MIN_MODALITY_LEN};
use crate::error::ArchiverError;
use crate::models::DirectoryScanResult;

/// Modality token of a file name: everything before the first `.`.
///
/// Returns `None` when the token is not 2 or 3 characters long.
pub fn modality_of(file_name: &str) -> Option<&str> {
    let modality = file_name.split('.').next().unwrap_or(file_name);
    let len = modality.chars().count();
    if (MIN_MODALITY_LEN..=MAX_MODALITY_LEN).contains(&len) {
        Some(modality)
    } else {
        None
    }
}

/// Scan the top level of an accession directory.
///
/// Every entry must be a regular file (symlinks are followed) whose name is
/// valid UTF-8 and carries a valid modality prefix. The first offending entry aborts the scan,
/// as does a directory with no files at all.
pub fn scan_accession_dir(dir: &Path) -> Result<DirectoryScanResult> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read accession directory {}", dir.display()))?;

    let mut result = DirectoryScanResult::default();

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();

        let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            return Err(ArchiverError::NotARegularFile(path).into());
        }

        // Non-UTF-8 names cannot carry a modality into the upload attributes
        let name = entry.file_name();
        let modality = match name.to_str().and_then(modality_of) {
            Some(modality) => modality,
            None => return Err(ArchiverError::BadModalityPrefix(path).into()),
        };

        result.modalities.insert(modality.to_string());
        result.file_count += 1;
    }

    if result.file_count == 0 {
        return Err(ArchiverError::NoFilesFound(dir.to_path_buf()).into());
    }

    debug!(
        "Scanned {}: {} files, modalities {:?}",
        dir.display(),
        result.file_count,
        result.modalities
    );

    Ok(result)
}
