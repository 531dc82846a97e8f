use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::dto::import_dto::UploadCsvResponse;
use crate::error::{Error, Result};
use crate::services::csv_service::CsvService;
use crate::store::DocumentStore;
use crate::AppState;

/// Bulk import endpoint: multipart form with a `csvFile` field carrying a
/// `text/csv` document. Parse/validation/write failures surface as 500 with
/// the error message; a missing or mistyped file is a 400.
pub async fn upload_csv<S: DocumentStore>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Result<Json<UploadCsvResponse>> {
    let mut csv_file: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("csvFile") {
            continue;
        }

        if field.content_type() != Some("text/csv") {
            return Err(Error::BadRequest(
                "Invalid file type. Please upload a CSV file.".to_string(),
            ));
        }

        csv_file = Some(field.bytes().await?);
    }

    let Some(bytes) = csv_file else {
        return Err(Error::BadRequest("No file provided".to_string()));
    };

    tracing::info!(size = bytes.len(), "CSV upload received");

    let rows = CsvService::parse(&bytes)?;
    let import = CsvService::build_import(&rows)?;
    let summary = state.import_service.run(import).await?;

    Ok(Json(UploadCsvResponse {
        message: "Data uploaded successfully".to_string(),
        summary,
    }))
}
