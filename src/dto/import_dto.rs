use serde::Serialize;

/// Per-run accounting surfaced to the caller instead of being logged away
/// server-side: how many rows arrived, what was written, what was skipped
/// by soft validation, and how many units-of-work were committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total_rows: usize,
    pub categories_written: usize,
    pub postings_written: usize,
    pub postings_skipped: usize,
    pub batches_committed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadCsvResponse {
    pub message: String,
    pub summary: ImportSummary,
}
