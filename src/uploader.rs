//! One archive-and-upload run.
//!
//! The phases run strictly in order and each one either completes or ends the
//! run: probe the destination, scan the accession directory, build the
//! archive, decide, upload. Path validation has already happened when the
//! [`UploadJob`] was built.

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::accession::scan_accession_dir;
use crate::cloud::ObjectStore;
use crate::config::UploadJob;
use crate::constants::STORED_MD5_METADATA_KEY;
use crate::error::ArchiverError;
use crate::models::{RemoteObjectInfo, RunOutcome, UploadAttributes};
use crate::utils::compress::Archiver;

/// What to do with a freshly built archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDecision {
    /// Stored digest equals the new one
    Skip,
    /// Overwrite requested; upload unconditionally
    Upload,
    /// Digests differ, or nothing is stored, and overwrite was not requested
    Mismatch,
}

/// Choose between skipping, uploading and failing.
///
/// Without `overwrite`, a missing remote object counts as a mismatch: the
/// first upload of an accession has to be made with `--overwrite`.
pub fn decide(overwrite: bool, existing: Option<&RemoteObjectInfo>, computed_md5: &str) -> UploadDecision {
    if overwrite {
        return UploadDecision::Upload;
    }
    match existing {
        Some(remote) if remote.content_md5 == computed_md5 => UploadDecision::Skip,
        _ => UploadDecision::Mismatch,
    }
}

/// Look up the digest stored with the destination object.
///
/// Returns `None` when the object does not exist or when `overwrite` makes the
/// stored digest irrelevant. Probe failures other than being unable to run the
/// client are treated as "no object".
pub fn probe_remote<S: ObjectStore + ?Sized>(store: &S, job: &UploadJob) -> Result<Option<RemoteObjectInfo>> {
    let response = store
        .stat(&job.object_key)
        .with_context(|| format!("Failed to probe '{}'", job.object_key))?;

    if job.debug {
        match response.json() {
            Ok(value) => println!("{}", value),
            Err(e) => warn!("{:#}", e),
        }
    }

    if !response.exists || job.overwrite {
        debug!("No existing digest for '{}'", job.object_key);
        return Ok(None);
    }

    info!("Object already exists: '{}'. Will compare checksums", job.object_key);

    let content_md5 = response
        .stored_md5()
        .with_context(|| format!("Failed to read metadata of '{}'", job.object_key))?
        .ok_or_else(|| ArchiverError::MissingStoredDigest {
            key: job.object_key.clone(),
            field: STORED_MD5_METADATA_KEY,
        })?;

    Ok(Some(RemoteObjectInfo { content_md5 }))
}

/// Run every phase for `job` against the given collaborators.
pub fn run_upload<S, A>(job: &UploadJob, store: &S, archiver: &A) -> Result<RunOutcome>
where
    S: ObjectStore + ?Sized,
    A: Archiver + ?Sized,
{
    let existing = probe_remote(store, job)?;

    let scan = scan_accession_dir(&job.accession_dir)?;

    let payload = archiver.archive(&job.accession_dir, job.compression_level)?;

    match decide(job.overwrite, existing.as_ref(), &payload.md5) {
        UploadDecision::Skip => {
            debug!("'{}' is up to date (md5 {})", job.object_key, payload.md5);
            Ok(RunOutcome::UpToDate { md5: payload.md5 })
        }
        UploadDecision::Mismatch => Err(ArchiverError::ChecksumMismatch {
            computed: payload.md5,
            existing: existing.map(|remote| remote.content_md5),
            dir: job.accession_dir.clone(),
        }
        .into()),
        UploadDecision::Upload => {
            let attributes = UploadAttributes::new(&payload, &scan);
            store
                .pipe(&job.object_key, &attributes, &payload.data)
                .with_context(|| format!("Failed to upload '{}'", job.object_key))?;

            debug!(
                "Uploaded {} files ({} bytes) to '{}'",
                scan.file_count,
                payload.data.len(),
                job.object_key
            );
            Ok(RunOutcome::Uploaded {
                key: job.object_key.clone(),
                attributes,
            })
        }
    }
}
