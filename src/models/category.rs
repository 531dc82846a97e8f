use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category document stored under `categories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub information: Option<String>,
    /// Creation date as supplied by the import file, kept verbatim.
    pub created_at: Option<String>,
    pub imported_at: DateTime<Utc>,
}

/// Category fields carried through an import before an id is minted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub title: String,
    pub information: Option<String>,
    pub created_at: Option<String>,
}
