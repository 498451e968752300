//! Queries completed analyses through the wrangler CLI
//!
//! Wrangler prints banner and progress lines around the actual JSON
//! payload, so the payload is located by scanning the combined output
//! for the first `[`. The payload itself is a one-element array whose
//! first element carries the `results` rows.

use std::process::Command;

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;

use super::models::AnalysisRecord;
use crate::config::ExportConfig;

/// Fixed query: completed records with a non-empty summary, newest first
const COMPLETED_ANALYSES_SQL: &str = "SELECT \
      id, \
      title, \
      video_id, \
      upload_date, \
      transcript, \
      summary, \
      created_at \
    FROM analyses \
    WHERE status = 'completed' \
      AND summary IS NOT NULL \
      AND summary != '' \
    ORDER BY created_at DESC \
    LIMIT 200";

/// Result of a query attempt that ran the tool successfully
#[derive(Debug)]
pub enum QueryOutcome {
    /// Rows decoded from the tool's JSON payload (possibly empty)
    Records(Vec<AnalysisRecord>),
    /// The output carried no usable payload; the reason is operator-facing
    NoData(String),
}

/// Run the query tool and decode the completed-analysis rows
pub fn fetch_completed_analyses(config: &ExportConfig) -> Result<QueryOutcome> {
    let mut cmd = Command::new(&config.query_tool);
    cmd.args([
        "wrangler",
        "d1",
        "execute",
        &config.database,
        "--local",
        "--command",
        COMPLETED_ANALYSES_SQL,
    ]);

    if let Some(dir) = &config.working_dir {
        cmd.current_dir(dir);
    }

    info!("Querying completed analyses from {}", config.database);
    debug!("Query command: {:?}", cmd);

    let output = cmd
        .output()
        .with_context(|| format!("Failed to run query tool '{}'", config.query_tool))?;

    // Wrangler splits its chatter between the two streams; scan both.
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    decode_query_output(&combined)
}

/// Decode the tool output into records, or a no-data outcome
pub fn decode_query_output(output: &str) -> Result<QueryOutcome> {
    let json_text = match extract_json_payload(output) {
        Some(text) => text,
        None => {
            return Ok(QueryOutcome::NoData(
                "no JSON data found in query tool output".to_string(),
            ));
        }
    };

    let value: Value = serde_json::from_str(json_text)
        .context("Failed to parse JSON payload from query tool output")?;

    // Expected shape: [ { "results": [ ...rows... ], ... } ]
    let results = match value.get(0).and_then(|first| first.get("results")) {
        Some(results) => results.clone(),
        None => {
            return Ok(QueryOutcome::NoData(
                "no results found in database response".to_string(),
            ));
        }
    };

    let records: Vec<AnalysisRecord> = serde_json::from_value(results)
        .context("Failed to decode analysis rows from query results")?;

    debug!("Decoded {} analysis rows", records.len());
    Ok(QueryOutcome::Records(records))
}

/// Everything from the first `[` onward, if any
fn extract_json_payload(output: &str) -> Option<&str> {
    output.find('[').map(|start| &output[start..])
}
