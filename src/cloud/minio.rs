use anyhow::Result;
use log::debug;

use crate::cloud::{ObjectStore, StatResponse};
use crate::error::ArchiverError;
use crate::models::UploadAttributes;
use crate::process::{CommandRunner, CommandSpec};

/// [`ObjectStore`] implemented by shelling out to the MinIO client.
///
/// Aliases, endpoints and credentials come from the client's own
/// configuration, so keys look like `<alias>/<bucket>/<path>`.
#[derive(Debug, Clone)]
pub struct McClient<R> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> McClient<R> {
    pub fn new<S: Into<String>>(program: S, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn stat_command(&self, key: &str) -> CommandSpec {
        CommandSpec::new(self.program.as_str())
            .arg("stat")
            .arg("--json")
            .arg(key)
            .discard_stderr()
    }

    pub fn pipe_command(&self, key: &str, attributes: &UploadAttributes) -> CommandSpec {
        CommandSpec::new(self.program.as_str())
            .arg("pipe")
            .arg("--quiet")
            .arg("--attr")
            .arg(attributes.to_attr_string())
            .arg(key)
            .discard_stdout()
    }
}

impl<R: CommandRunner> ObjectStore for McClient<R> {
    fn stat(&self, key: &str) -> Result<StatResponse> {
        let output = self.runner.run(&self.stat_command(key), None)?;
        debug!("stat {} returned {:?}", key, output.code);

        Ok(StatResponse {
            exists: output.success(),
            body: output.stdout,
        })
    }

    fn pipe(&self, key: &str, attributes: &UploadAttributes, body: &[u8]) -> Result<()> {
        let output = self.runner.run(&self.pipe_command(key, attributes), Some(body))?;

        if !output.success() {
            return Err(ArchiverError::ExternalCommand {
                program: self.program.clone(),
                code: output.code,
            }
            .into());
        }

        debug!("Piped {} bytes to {}", body.len(), key);
        Ok(())
    }
}
