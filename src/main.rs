use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode, ColorChoice};

use dicom_archiver::cli::Args;
use dicom_archiver::cloud::McClient;
use dicom_archiver::config::{ToolConfig, UploadJob};
use dicom_archiver::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use dicom_archiver::error::exit_code_for;
use dicom_archiver::models::RunOutcome;
use dicom_archiver::process::SystemRunner;
use dicom_archiver::uploader::run_upload;
use dicom_archiver::utils::compress::TarGzArchiver;

fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    if let Err(e) = initialize_logging(args.debug) {
        eprintln!("{:#}", e);
        return ExitCode::from(EXIT_FAILURE);
    }

    match run(&args) {
        Ok(outcome) => {
            debug!("Finished: {:?}", outcome);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Initialize logging on stderr; `--debug` lowers the level to Debug
fn initialize_logging(debug: bool) -> Result<()> {
    let log_level = if debug { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

/// Validate the arguments, wire up the real collaborators and run
fn run(args: &Args) -> Result<RunOutcome> {
    // Validation happens before any external program is touched
    let job = UploadJob::from_args(args)?;
    let tools = ToolConfig::default();

    let runner = SystemRunner::new(job.debug);
    let store = McClient::new(tools.store_client.as_str(), runner.clone());
    let archiver = TarGzArchiver::new(tools.archiver.as_str(), tools.compressor.as_str(), runner);

    run_upload(&job, &store, &archiver)
}
