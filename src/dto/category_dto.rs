use serde::Serialize;

use crate::models::category::Category;
use crate::models::posting::Posting;

/// One category document together with its `posting` sub-collection.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetailResponse {
    pub category: Category,
    pub postings: Vec<Posting>,
}
