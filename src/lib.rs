// analysis-export - export completed video analyses and upload the archive
//
// Two single-shot tools built from this library:
// - export-analyses: database query -> per-record text files -> ZIP archive
// - upload-archive: ZIP archive -> multipart POST to the file host

pub mod config;
pub mod db;
pub mod export;
pub mod upload;

pub use config::{ExportConfig, UploadConfig};

/// Initialize env_logger to output to stderr (reads RUST_LOG env var)
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
