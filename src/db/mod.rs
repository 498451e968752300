// Database access for the exporter
// Read-only: records come back through the wrangler CLI as JSON

pub mod models;
pub mod query;

pub use models::AnalysisRecord;
pub use query::{fetch_completed_analyses, QueryOutcome};
