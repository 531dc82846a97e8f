use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::category::NewCategory;
use crate::models::import::{CsvRow, ImportBatch};
use crate::models::posting::NewPosting;

/// Header names that must be present in every import file. Exact and
/// case-sensitive.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Category Title",
    "Category Created At",
    "Category Information",
    "Job Company",
    "Job Title",
];

/// Parser, validator and transformer for the CSV bulk import. No I/O
/// happens here; the batched writer lives in the import service.
pub struct CsvService;

impl CsvService {
    /// Parse raw CSV bytes into rows keyed by header name. The first line
    /// is the header row; cells are trimmed. Malformed grammar aborts the
    /// import before anything is written.
    pub fn parse(bytes: &[u8]) -> Result<Vec<CsvRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut values = HashMap::new();
            for (idx, header) in headers.iter().enumerate() {
                let value = record.get(idx).unwrap_or_default();
                values.insert(header.clone(), value.to_string());
            }
            rows.push(CsvRow::new(values));
        }

        Ok(rows)
    }

    /// Validate the parsed rows and reshape them into one category plus its
    /// ordered postings. Category fields are read from the first data row
    /// only; every row (the first included) becomes one posting.
    pub fn build_import(rows: &[CsvRow]) -> Result<ImportBatch> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyCsv);
        };

        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !first.has_column(column))
            .map(|column| column.to_string())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }

        let category = NewCategory {
            title: first.owned_field("Category Title").unwrap_or_default(),
            information: first.owned_field("Category Information"),
            created_at: first.owned_field("Category Created At"),
        };

        let postings = rows.iter().map(Self::posting_from_row).collect();

        Ok(ImportBatch { category, postings })
    }

    fn posting_from_row(row: &CsvRow) -> NewPosting {
        NewPosting {
            job_company: row.owned_field("Job Company"),
            job_title: row.owned_field("Job Title").unwrap_or_default(),
            job_description: row.owned_field("Job Description"),
            contact_email: row.owned_field("Contact Email"),
            contact_number: row.owned_field("Contact Number"),
            address: row.owned_field("Address"),
            city: row.owned_field("City"),
            state: row.owned_field("State"),
            postal_code: row.owned_field("Postal Code"),
            salary: row.owned_field("Salary"),
            image_url: row.owned_field("Image URL"),
            tags: split_tags(row.field("Tags")),
            created_at: row.owned_field("Job Created At"),
        }
    }
}

// Tag cells are comma-delimited; individual tags are not re-trimmed beyond
// the cell-level trim applied by the parser.
fn split_tags(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(value) => value.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CSV: &str = "\
Category Title,Category Created At,Category Information,Job Company,Job Title,Tags
Eng,2024-01-01,desc,Acme,Dev,\"a,b,c\"
,,,Acme,Ops,
";

    fn rows(csv: &str) -> Vec<CsvRow> {
        CsvService::parse(csv.as_bytes()).expect("csv should parse")
    }

    #[test]
    fn parses_rows_keyed_by_header_with_trimmed_cells() {
        let rows = rows(
            "Category Title,Job Title\n  Eng  ,  Dev  \n",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field("Category Title"), Some("Eng"));
        assert_eq!(rows[0].field("Job Title"), Some("Dev"));
    }

    #[test]
    fn malformed_csv_is_a_parse_error() {
        let result = CsvService::parse(b"Category Title,Job Title\n\"unterminated,Dev\n");
        assert!(matches!(result, Err(Error::CsvParse(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        let rows = rows("Category Title,Category Created At,Category Information,Job Company,Job Title\n");
        assert!(matches!(
            CsvService::build_import(&rows),
            Err(Error::EmptyCsv)
        ));
    }

    #[test]
    fn missing_columns_are_reported_exactly() {
        let rows = rows("Category Title,Job Title\nEng,Dev\n");
        let err = CsvService::build_import(&rows).unwrap_err();
        match err {
            Error::MissingColumns(missing) => assert_eq!(
                missing,
                vec![
                    "Category Created At".to_string(),
                    "Category Information".to_string(),
                    "Job Company".to_string(),
                ]
            ),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn category_comes_from_the_first_row_only() {
        let csv = "\
Category Title,Category Created At,Category Information,Job Company,Job Title
Eng,2024-01-01,desc,Acme,Dev
Sales,2024-02-02,other,Acme,Rep
";
        let import = CsvService::build_import(&rows(csv)).unwrap();
        assert_eq!(import.category.title, "Eng");
        assert_eq!(import.category.created_at.as_deref(), Some("2024-01-01"));
        assert_eq!(import.category.information.as_deref(), Some("desc"));
        // Both rows still become postings.
        assert_eq!(import.postings.len(), 2);
        assert_eq!(import.postings[1].job_title, "Rep");
    }

    #[test]
    fn tags_cell_splits_on_commas_and_blank_means_empty() {
        let import = CsvService::build_import(&rows(VALID_CSV)).unwrap();
        assert_eq!(import.postings[0].tags, vec!["a", "b", "c"]);
        assert!(import.postings[1].tags.is_empty());
    }

    #[test]
    fn blank_cells_map_to_none() {
        let import = CsvService::build_import(&rows(VALID_CSV)).unwrap();
        let ops_row = &import.postings[1];
        assert_eq!(ops_row.job_title, "Ops");
        assert!(ops_row.job_description.is_none());
        assert!(ops_row.contact_email.is_none());
    }

    #[test]
    fn single_row_fixture_produces_one_category_and_one_posting() {
        let csv = "\
Category Title,Category Created At,Category Information,Job Company,Job Title
Eng,2024-01-01,desc,Acme,Dev
";
        let import = CsvService::build_import(&rows(csv)).unwrap();
        assert_eq!(import.category.title, "Eng");
        assert_eq!(import.postings.len(), 1);
        assert_eq!(import.postings[0].job_company.as_deref(), Some("Acme"));
        assert_eq!(import.postings[0].job_title, "Dev");
    }
}
