use std::collections::HashMap;

use crate::models::category::NewCategory;
use crate::models::posting::NewPosting;

/// One parsed CSV line, keyed by header name. Cells are trimmed during
/// parsing; a blank cell is kept so header presence can still be checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvRow {
    values: HashMap<String, String>,
}

impl CsvRow {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Whether the column existed in the header row, blank or not.
    pub fn has_column(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Cell value with blanks treated as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn owned_field(&self, name: &str) -> Option<String> {
        self.field(name).map(str::to_string)
    }
}

/// One category with its ordered postings, produced once per import run.
/// This system supports exactly one category per CSV file; the category
/// fields come from the first data row.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    pub category: NewCategory,
    pub postings: Vec<NewPosting>,
}
