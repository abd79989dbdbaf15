use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;

use crate::error::ArchiverError;
use crate::models::ArchivePayload;
use crate::process::{CommandRunner, CommandSpec};
use crate::utils::hash::calculate_md5;

/// Builds the compressed archive of an accession directory.
pub trait Archiver {
    /// Archive the contents of `source_dir` at gzip `level` and return the
    /// compressed bytes with their digest.
    fn archive(&self, source_dir: &Path, level: u8) -> Result<ArchivePayload>;
}

/// [`Archiver`] running an external tar with a gzip-compatible compressor.
///
/// Entries are stored relative to the accession directory (`./CT.1.dcm`), and
/// the whole compressed stream is captured in memory. The digest covers the
/// compressed bytes, so a different compressor version or level changes it
/// even when the files did not.
#[derive(Debug, Clone)]
pub struct TarGzArchiver<R> {
    archiver: String,
    compressor: String,
    runner: R,
}

impl<R: CommandRunner> TarGzArchiver<R> {
    pub fn new<S: Into<String>>(archiver: S, compressor: S, runner: R) -> Self {
        Self {
            archiver: archiver.into(),
            compressor: compressor.into(),
            runner,
        }
    }

    pub fn archive_command(&self, source_dir: &Path, level: u8) -> CommandSpec {
        CommandSpec::new(self.archiver.as_str())
            .arg("-cO")
            .arg(format!("--use-compress-program={} -{}", self.compressor, level))
            .arg("-C")
            .arg(source_dir.to_string_lossy())
            .arg(".")
    }
}

impl<R: CommandRunner> Archiver for TarGzArchiver<R> {
    fn archive(&self, source_dir: &Path, level: u8) -> Result<ArchivePayload> {
        let start = Instant::now();

        let output = self
            .runner
            .run(&self.archive_command(source_dir, level), None)
            .with_context(|| format!("Failed to archive {}", source_dir.display()))?;

        if !output.success() {
            return Err(ArchiverError::ExternalCommand {
                program: self.archiver.clone(),
                code: output.code,
            }
            .into());
        }

        let md5 = calculate_md5(&output.stdout);
        debug!(
            "Archived {} to {} bytes (md5 {}) in {:?}",
            source_dir.display(),
            output.stdout.len(),
            md5,
            start.elapsed()
        );

        Ok(ArchivePayload {
            data: output.stdout,
            md5,
        })
    }
}
