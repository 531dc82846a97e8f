use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Posting document stored in the `posting` sub-collection of its category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub id: Uuid,
    pub category_id: Uuid,
    /// Denormalized parent title, kept on every posting for join-free queries.
    pub category: String,
    pub job_company: Option<String>,
    pub job_title: String,
    pub job_description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub salary: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<String>,
    pub imported_at: DateTime<Utc>,
}

/// Posting fields produced by the transformer, one per CSV row. The job
/// title may still be blank here; the writer skips such records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosting {
    pub job_company: Option<String>,
    pub job_title: String,
    pub job_description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub salary: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<String>,
}
