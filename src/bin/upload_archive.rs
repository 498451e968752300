//! Upload binary
//!
//! Submits the export archive to the remote file host and reports the
//! raw status and body, plus the download URL when the response
//! carries one. Exits 1 on any error; a non-2xx response is reported
//! but is not an error.

use std::path::PathBuf;
use std::process::ExitCode;

use analysis_export::upload::{interpret_response, send_archive, UploadOutcome};
use analysis_export::{init_logging, UploadConfig};
use log::error;

fn main() -> ExitCode {
    init_logging();

    let mut config = UploadConfig::from_env();
    // Optional positional override for the archive path
    if let Some(path) = std::env::args().nth(1) {
        config.archive_path = PathBuf::from(path);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Upload failed: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &UploadConfig) -> anyhow::Result<()> {
    let report = send_archive(config)?;

    println!("Status Code: {}", report.status);
    println!("Response: {}", report.body);

    match interpret_response(report.status, &report.body)? {
        UploadOutcome::Success { locator, body } => match locator {
            Some(url) => {
                println!("Upload succeeded");
                println!("Download URL: {}", url);
            }
            None => {
                println!("Uploaded, but no download URL found in the response");
                println!("Response data: {}", body);
            }
        },
        UploadOutcome::Failure { status } => {
            println!("Upload failed with status {}", status);
        }
    }

    Ok(())
}
