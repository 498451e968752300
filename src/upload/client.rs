//! Multipart upload of the archive file

use std::fs;

use anyhow::{Context, Result};
use log::info;
use reqwest::blocking::{multipart, Client};

use crate::config::UploadConfig;

/// Raw HTTP result of an upload request
#[derive(Debug)]
pub struct UploadReport {
    pub status: u16,
    pub body: String,
}

/// POST the archive to the configured endpoint as a multipart form.
///
/// The archive goes into a form field named `file`, presented under the
/// configured filename with an `application/zip` content type. The
/// timeout is generous; archives full of transcripts can run large.
pub fn send_archive(config: &UploadConfig) -> Result<UploadReport> {
    let bytes = fs::read(&config.archive_path)
        .with_context(|| format!("Failed to read archive {:?}", config.archive_path))?;

    info!(
        "Uploading {:?} ({} bytes) to {}",
        config.archive_path,
        bytes.len(),
        config.endpoint
    );

    let part = multipart::Part::bytes(bytes)
        .file_name(config.target_filename.clone())
        .mime_str("application/zip")
        .context("Failed to build multipart file part")?;
    let form = multipart::Form::new().part("file", part);

    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(&config.endpoint)
        .multipart(form)
        .send()
        .with_context(|| format!("Upload request to {} failed", config.endpoint))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .context("Failed to read upload response body")?;

    Ok(UploadReport { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_archive_is_an_error() {
        let config = UploadConfig {
            archive_path: PathBuf::from("/nonexistent/archive.zip"),
            ..UploadConfig::default()
        };
        let err = send_archive(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read archive"));
    }
}
