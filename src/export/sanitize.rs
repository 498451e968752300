//! Filename derivation for exported analysis files
//!
//! Titles come straight from video metadata and can contain anything;
//! only letters (any script), digits and whitespace survive into the
//! filename, and spaces become underscores.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::AnalysisRecord;

/// Characters stripped from titles before they enter a filename
static FORBIDDEN_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}\s]").expect("invalid filename sanitizer pattern")
});

/// Titles are cut to this many characters before trimming
const MAX_TITLE_CHARS: usize = 30;

/// Reduce a raw title to a filesystem-safe fragment.
///
/// Strips forbidden characters, truncates to 30 characters, trims
/// surrounding whitespace and joins the remaining words with `_`.
/// May return an empty string; callers still get a valid filename.
pub fn sanitize_title(title: &str) -> String {
    let stripped = FORBIDDEN_CHARS.replace_all(title, "");
    let truncated: String = stripped.chars().take(MAX_TITLE_CHARS).collect();
    truncated.trim().replace(' ', "_")
}

/// Filename prefix shared by a record's summary and transcript files:
/// `<upload_date_no_dashes>_<sanitized_title>_<video_id>`
pub fn filename_prefix(record: &AnalysisRecord) -> String {
    format!(
        "{}_{}_{}",
        record.upload_date_compact(),
        sanitize_title(record.title()),
        record.video_id()
    )
}
