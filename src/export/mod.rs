// Exporter: completed analyses -> text files -> one ZIP archive

pub mod archive;
pub mod sanitize;
pub mod writer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::config::ExportConfig;
use crate::db::{self, QueryOutcome};

/// Counts reported at the end of a successful export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub files_written: usize,
    pub records_processed: usize,
    pub archive_size_bytes: u64,
    pub archive_path: PathBuf,
}

impl ExportSummary {
    pub fn archive_size_mb(&self) -> f64 {
        self.archive_size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Result of an export run that did not fail outright
#[derive(Debug)]
pub enum ExportOutcome {
    Completed(ExportSummary),
    /// The query yielded no usable data; nothing was archived
    NoData(String),
}

/// Query, write the per-record files, and build the archive.
///
/// Files written before a later failure stay on disk; there is no
/// rollback.
pub fn run_export(config: &ExportConfig) -> Result<ExportOutcome> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory {:?}", config.output_dir)
    })?;

    let records = match db::fetch_completed_analyses(config)? {
        QueryOutcome::Records(records) => records,
        QueryOutcome::NoData(reason) => return Ok(ExportOutcome::NoData(reason)),
    };

    info!("Writing files for {} analyses", records.len());

    let mut files_written = 0;
    for record in &records {
        files_written += writer::write_record_files(&config.output_dir, record)?;
    }

    let archive_size_bytes = archive::build_archive(
        &config.output_dir,
        &config.archive_path,
        &config.archive_folder,
    )?;

    Ok(ExportOutcome::Completed(ExportSummary {
        files_written,
        records_processed: records.len(),
        archive_size_bytes,
        archive_path: config.archive_path.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_size_mb() {
        let summary = ExportSummary {
            files_written: 3,
            records_processed: 2,
            archive_size_bytes: 3 * 1024 * 1024,
            archive_path: PathBuf::from("out.zip"),
        };
        assert!((summary.archive_size_mb() - 3.0).abs() < f64::EPSILON);
    }
}
