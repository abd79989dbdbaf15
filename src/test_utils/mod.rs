//! Test utilities for dicom-archiver
//!
//! This module provides common testing utilities, helpers, and fakes
//! for use across all test modules.

#![cfg(test)]

use anyhow::{anyhow, Result};
use std::collections::VecDeque;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::process::{CommandOutput, CommandRunner, CommandSpec};

/// Creates a temporary accession directory holding the named files
pub fn create_accession_dir(file_names: &[&str]) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for (i, name) in file_names.iter().enumerate() {
        fs::write(temp_dir.path().join(name), format!("DICM {}", i))?;
    }
    Ok(temp_dir)
}

/// One invocation seen by [`RecordingRunner`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub spec: CommandSpec,
    pub input: Option<Vec<u8>>,
}

/// Command runner that records invocations and replays scripted outputs
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    outputs: Arc<Mutex<VecDeque<CommandOutput>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output returned by the next call
    pub fn push_output(&self, code: i32, stdout: &[u8]) {
        self.outputs.lock().unwrap().push_back(CommandOutput {
            code: Some(code),
            stdout: stdout.to_vec(),
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec, input: Option<&[u8]>) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(RecordedCall {
            spec: spec.clone(),
            input: input.map(<[u8]>::to_vec),
        });
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted output for {}", spec.display_line()))
    }
}

/// Whether the real archiver and compressor are installed
pub fn archive_tools_available() -> bool {
    std::path::Path::new(crate::constants::DEFAULT_COMPRESSOR).exists()
        && std::process::Command::new(crate::constants::DEFAULT_ARCHIVER)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
}
