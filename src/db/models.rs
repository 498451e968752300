use serde::Deserialize;

/// One row of the `analyses` table as returned by the query tool.
///
/// Every column is optional: the table allows NULLs and the JSON the
/// tool emits omits nothing we can rely on.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AnalysisRecord {
    /// Title for display and filename purposes; NULL titles render as "Untitled"
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) => t,
            None => "Untitled",
        }
    }

    pub fn video_id(&self) -> &str {
        self.video_id.as_deref().unwrap_or("")
    }

    /// Upload date with the dashes stripped, e.g. "2024-03-01" -> "20240301"
    pub fn upload_date_compact(&self) -> String {
        self.upload_date.as_deref().unwrap_or("").replace('-', "")
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn transcript(&self) -> &str {
        self.transcript.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 42,
            "title": "한글 제목 Example",
            "video_id": "abc123XYZ",
            "upload_date": "2024-03-01",
            "transcript": "full transcript text",
            "summary": "summary text",
            "created_at": "2024-03-02T10:00:00Z"
        }"#;

        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(42));
        assert_eq!(record.title(), "한글 제목 Example");
        assert_eq!(record.upload_date_compact(), "20240301");
        assert_eq!(record.summary(), "summary text");
    }

    #[test]
    fn test_deserialize_nulls_and_missing_fields() {
        let record: AnalysisRecord =
            serde_json::from_str(r#"{"id": null, "title": null, "video_id": "v1"}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.title(), "Untitled");
        assert_eq!(record.video_id(), "v1");
        assert_eq!(record.upload_date_compact(), "");
        assert!(record.summary().is_empty());
        assert!(record.transcript().is_empty());
    }
}
