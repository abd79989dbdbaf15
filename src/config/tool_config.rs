use crate::constants::{DEFAULT_ARCHIVER, DEFAULT_COMPRESSOR, DEFAULT_STORE_CLIENT};

/// Programs the run shells out to.
///
/// Credentials and endpoints belong to the object-store client's own
/// configuration; only the program names are chosen here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Object-store client supporting `stat --json` and `pipe --attr`
    pub store_client: String,
    /// Archiver supporting `-C <dir>` and `--use-compress-program`
    pub archiver: String,
    /// gzip-compatible compressor taking `-<level>`
    pub compressor: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            store_client: DEFAULT_STORE_CLIENT.to_string(),
            archiver: DEFAULT_ARCHIVER.to_string(),
            compressor: DEFAULT_COMPRESSOR.to_string(),
        }
    }
}
