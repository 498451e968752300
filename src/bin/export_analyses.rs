//! Export binary
//!
//! Queries the local database for completed analyses, writes each
//! record's summary and transcript to text files, and bundles the
//! output directory into one ZIP archive. Exits 1 when the query
//! yields no usable data or any step fails.

use std::process::ExitCode;

use analysis_export::export::{run_export, ExportOutcome};
use analysis_export::{init_logging, ExportConfig};
use log::error;

fn main() -> ExitCode {
    init_logging();

    let config = ExportConfig::from_env();

    match run_export(&config) {
        Ok(ExportOutcome::Completed(summary)) => {
            println!("Export complete");
            println!("Files written:  {}", summary.files_written);
            println!("Analyses:       {}", summary.records_processed);
            println!("Archive size:   {:.2} MB", summary.archive_size_mb());
            println!("Archive path:   {}", summary.archive_path.display());
            ExitCode::SUCCESS
        }
        Ok(ExportOutcome::NoData(reason)) => {
            error!("No data found: {}", reason);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("Export failed: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
