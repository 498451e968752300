//! Per-record text file output

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::sanitize::filename_prefix;
use crate::db::AnalysisRecord;

/// Write a record's summary and transcript files into `output_dir`.
///
/// Empty fields are skipped without error. Colliding filenames from
/// duplicate records overwrite silently, last write wins. Returns the
/// number of files written (0..=2).
pub fn write_record_files(output_dir: &Path, record: &AnalysisRecord) -> Result<usize> {
    let prefix = filename_prefix(record);
    let mut written = 0;

    let summary = record.summary();
    if !summary.is_empty() {
        let path = output_dir.join(format!("{}_summary.txt", prefix));
        fs::write(&path, summary)
            .with_context(|| format!("Failed to write summary file {:?}", path))?;
        written += 1;
    }

    let transcript = record.transcript();
    if !transcript.is_empty() {
        let path = output_dir.join(format!("{}_transcript.txt", prefix));
        fs::write(&path, transcript)
            .with_context(|| format!("Failed to write transcript file {:?}", path))?;
        written += 1;
    }

    let id = record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let label: String = prefix.chars().take(40).collect();
    info!("ID {}: {} ({} file(s))", id, label, written);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(summary: Option<&str>, transcript: Option<&str>) -> AnalysisRecord {
        AnalysisRecord {
            id: Some(7),
            title: Some("Test Video".to_string()),
            video_id: Some("vid7".to_string()),
            upload_date: Some("2024-05-06".to_string()),
            transcript: transcript.map(String::from),
            summary: summary.map(String::from),
            created_at: None,
        }
    }

    #[test]
    fn test_writes_both_files() {
        let dir = tempdir().unwrap();
        let n = write_record_files(dir.path(), &record(Some("sum"), Some("tra"))).unwrap();
        assert_eq!(n, 2);

        let summary_path = dir.path().join("20240506_Test_Video_vid7_summary.txt");
        let transcript_path = dir.path().join("20240506_Test_Video_vid7_transcript.txt");
        assert_eq!(fs::read_to_string(summary_path).unwrap(), "sum");
        assert_eq!(fs::read_to_string(transcript_path).unwrap(), "tra");
    }

    #[test]
    fn test_skips_empty_transcript() {
        let dir = tempdir().unwrap();
        let n = write_record_files(dir.path(), &record(Some("sum"), Some(""))).unwrap();
        assert_eq!(n, 1);
        assert!(!dir.path().join("20240506_Test_Video_vid7_transcript.txt").exists());
    }

    #[test]
    fn test_skips_null_summary() {
        let dir = tempdir().unwrap();
        let n = write_record_files(dir.path(), &record(None, Some("tra"))).unwrap();
        assert_eq!(n, 1);
        assert!(!dir.path().join("20240506_Test_Video_vid7_summary.txt").exists());
    }

    #[test]
    fn test_empty_title_still_produces_file() {
        let dir = tempdir().unwrap();
        let mut rec = record(Some("sum"), None);
        rec.title = Some("!!!".to_string());
        let n = write_record_files(dir.path(), &rec).unwrap();
        assert_eq!(n, 1);
        assert!(dir.path().join("20240506__vid7_summary.txt").exists());
    }

    #[test]
    fn test_collision_overwrites_last_write_wins() {
        let dir = tempdir().unwrap();
        write_record_files(dir.path(), &record(Some("first"), None)).unwrap();
        write_record_files(dir.path(), &record(Some("second"), None)).unwrap();

        let path = dir.path().join("20240506_Test_Video_vid7_summary.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_utf8_content_round_trips() {
        let dir = tempdir().unwrap();
        write_record_files(dir.path(), &record(Some("요약 내용 📝"), None)).unwrap();
        let path = dir.path().join("20240506_Test_Video_vid7_summary.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "요약 내용 📝");
    }
}
