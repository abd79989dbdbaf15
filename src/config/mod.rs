// Re-export all items from the submodules
mod tool_config;
mod upload_job;

pub use tool_config::ToolConfig;
pub use upload_job::UploadJob;
