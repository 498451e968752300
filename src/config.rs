//! Run configuration for the export and upload tools
//!
//! Every path, endpoint and database name the tools touch lives here,
//! with fixed defaults overridable through environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Exporter configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the per-record .txt files are written to
    pub output_dir: PathBuf,
    /// Path of the ZIP archive produced at the end of a run
    pub archive_path: PathBuf,
    /// Folder name prefixed to every entry inside the archive
    pub archive_folder: String,
    /// Executable used to reach the database (invoked as `<tool> wrangler d1 execute ...`)
    pub query_tool: String,
    /// D1 database name passed to the query tool
    pub database: String,
    /// Working directory for the query tool, if it needs one
    pub working_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("completed_analyses"),
            archive_path: PathBuf::from("completed_analyses.zip"),
            archive_folder: "completed_analyses".to_string(),
            query_tool: "npx".to_string(),
            database: "hidb-production".to_string(),
            working_dir: None,
        }
    }
}

impl ExportConfig {
    /// Build a config from defaults with `ANALYSIS_EXPORT_*` overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var("ANALYSIS_EXPORT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("ANALYSIS_EXPORT_ARCHIVE") {
            config.archive_path = PathBuf::from(path);
        }
        if let Ok(tool) = env::var("ANALYSIS_EXPORT_QUERY_TOOL") {
            config.query_tool = tool;
        }
        if let Ok(db) = env::var("ANALYSIS_EXPORT_DATABASE") {
            config.database = db;
        }
        if let Ok(dir) = env::var("ANALYSIS_EXPORT_WORKDIR") {
            config.working_dir = Some(PathBuf::from(dir));
        }
        config
    }
}

/// Uploader configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Archive file submitted to the remote endpoint
    pub archive_path: PathBuf,
    /// Upload endpoint URL
    pub endpoint: String,
    /// Filename presented in the multipart form
    pub target_filename: String,
    /// Request timeout; generous to tolerate large archives
    pub timeout: Duration,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from("completed_analyses.zip"),
            endpoint: "https://www.genspark.ai/api/files/upload".to_string(),
            target_filename: "completed_analyses.zip".to_string(),
            timeout: Duration::from_secs(180),
        }
    }
}

impl UploadConfig {
    /// Build a config from defaults with `ANALYSIS_UPLOAD_*` overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var("ANALYSIS_UPLOAD_ARCHIVE") {
            config.archive_path = PathBuf::from(path);
        }
        if let Ok(url) = env::var("ANALYSIS_UPLOAD_URL") {
            config.endpoint = url;
        }
        if let Ok(name) = env::var("ANALYSIS_UPLOAD_FILENAME") {
            config.target_filename = name;
        }
        config
    }
}
