//! Blocking invocation of external programs.
//!
//! Every collaborator (archiver, object-store client) goes through a
//! [`CommandRunner`] so tests can substitute a fake that records the argument
//! vectors instead of spawning anything.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{anyhow, Context, Result};
use log::debug;

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Send the program's stdout to the null device instead of capturing it
    pub discard_stdout: bool,
    /// Send the program's stderr to the null device instead of inheriting it
    pub discard_stderr: bool,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            discard_stdout: false,
            discard_stderr: false,
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn discard_stdout(mut self) -> Self {
        self.discard_stdout = true;
        self
    }

    pub fn discard_stderr(mut self) -> Self {
        self.discard_stderr = true;
        self
    }

    /// Space-joined argument vector, as `echo` would print it.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a finished invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the program was terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `spec` to completion, feeding `input` on stdin when given.
    ///
    /// A non-zero exit is reported through [`CommandOutput::code`], not as an
    /// error; errors mean the program could not be run at all.
    fn run(&self, spec: &CommandSpec, input: Option<&[u8]>) -> Result<CommandOutput>;
}

/// Runs commands on the host, inheriting stderr unless the command discards it.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    echo: bool,
}

impl SystemRunner {
    /// With `echo`, each command line is printed to stdout before it runs.
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec, input: Option<&[u8]>) -> Result<CommandOutput> {
        if self.echo {
            println!("{}", spec.display_line());
        }
        debug!("Running {}", spec.display_line());

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(if spec.discard_stdout { Stdio::null() } else { Stdio::piped() })
            .stderr(if spec.discard_stderr { Stdio::null() } else { Stdio::inherit() });

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to execute {}", spec.program))?;

        let output = match input {
            Some(data) => {
                let mut stdin = child
                    .stdin
                    .take()
                    .ok_or_else(|| anyhow!("Failed to open stdin of {}", spec.program))?;
                // Feed stdin from a separate thread so a full stdout pipe cannot stall us
                thread::scope(|scope| {
                    let writer = scope.spawn(move || stdin.write_all(data));
                    let output = child.wait_with_output();
                    let written = writer
                        .join()
                        .map_err(|_| anyhow!("stdin writer for {} panicked", spec.program))?;
                    let output = output
                        .with_context(|| format!("Failed to wait for {}", spec.program))?;
                    // A program that exits early closes the pipe; its status says more
                    if output.status.success() {
                        written.with_context(|| {
                            format!("Failed to write stdin of {}", spec.program)
                        })?;
                    }
                    Ok::<_, anyhow::Error>(output)
                })?
            }
            None => child
                .wait_with_output()
                .with_context(|| format!("Failed to wait for {}", spec.program))?,
        };

        debug!(
            "{} finished with {:?} ({} bytes on stdout)",
            spec.program,
            output.status.code(),
            output.stdout.len()
        );

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: output.stdout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let spec = CommandSpec::new("mc").arg("stat").arg("--json").arg("minio/bucket/a.tar.gz");
        assert_eq!(spec.display_line(), "mc stat --json minio/bucket/a.tar.gz");
        assert!(!spec.discard_stdout);
        assert!(spec.clone().discard_stdout().discard_stdout);
        assert!(!spec.discard_stderr);
        assert!(spec.clone().discard_stderr().discard_stderr);
    }

    #[test]
    fn test_output_success() {
        assert!(CommandOutput { code: Some(0), stdout: Vec::new() }.success());
        assert!(!CommandOutput { code: Some(1), stdout: Vec::new() }.success());
        assert!(!CommandOutput { code: None, stdout: Vec::new() }.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout_and_code() {
        let runner = SystemRunner::new(false);
        let output = runner
            .run(&CommandSpec::new("sh").arg("-c").arg("printf hello; exit 4"), None)
            .unwrap();
        assert_eq!(output.code, Some(4));
        assert_eq!(output.stdout, b"hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_echoing_runner_keeps_captured_stdout_clean() {
        // The echoed command line goes to our stdout, not into the capture
        let runner = SystemRunner::new(true);
        let output = runner
            .run(&CommandSpec::new("sh").arg("-c").arg("printf captured"), None)
            .unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, b"captured");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_discards_stderr() {
        let runner = SystemRunner::new(false);
        let output = runner
            .run(
                &CommandSpec::new("sh")
                    .arg("-c")
                    .arg("echo 'Object does not exist' >&2; printf '{}'; exit 1")
                    .discard_stderr(),
                None,
            )
            .unwrap();
        assert_eq!(output.code, Some(1));
        assert_eq!(output.stdout, b"{}");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_feeds_stdin() {
        let runner = SystemRunner::new(false);
        let input = vec![b'x'; 256 * 1024];
        let output = runner.run(&CommandSpec::new("cat"), Some(input.as_slice())).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.len(), input.len());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let runner = SystemRunner::new(false);
        let err = runner
            .run(&CommandSpec::new("definitely-not-a-real-program-4d5a"), None)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }
}
