use uuid::Uuid;

use crate::dto::import_dto::ImportSummary;
use crate::error::Result;
use crate::models::import::ImportBatch;
use crate::store::{DocumentStore, StoreError, WriteBatch, WriteOp};

/// Batched writer for one import run.
///
/// Accumulates writes into a unit-of-work, committing whenever the op
/// counter reaches the configured ceiling and flushing the tail at the end.
/// A commit failure aborts the rest of the import; units committed before
/// the failure stay persisted (partial import is the accepted failure mode).
#[derive(Clone)]
pub struct ImportService<S> {
    store: S,
    batch_op_limit: usize,
}

impl<S: DocumentStore> ImportService<S> {
    pub fn new(store: S, batch_op_limit: usize) -> Self {
        Self {
            store,
            batch_op_limit,
        }
    }

    /// Persist one [`ImportBatch`]: the category document first, then its
    /// postings in row order. Records failing soft validation (blank
    /// category title, blank job title) are skipped with a warning rather
    /// than aborting the import.
    pub async fn run(&self, import: ImportBatch) -> Result<ImportSummary> {
        let ImportBatch { category, postings } = import;

        let mut summary = ImportSummary {
            total_rows: postings.len(),
            ..ImportSummary::default()
        };

        if category.title.trim().is_empty() {
            tracing::warn!(?category, "Skipping invalid category");
            summary.postings_skipped = postings.len();
            return Ok(summary);
        }

        let category_id = Uuid::new_v4();
        let category_title = category.title.clone();

        let mut batch = WriteBatch::default();
        // Parent before children: posting documents reference the category id.
        batch.push(WriteOp::PutCategory {
            id: category_id,
            category,
        });
        self.commit_if_full(&mut batch, &mut summary).await?;
        summary.categories_written += 1;

        for posting in postings {
            if posting.job_title.trim().is_empty() {
                tracing::warn!(?posting, "Skipping posting with missing jobTitle");
                summary.postings_skipped += 1;
                continue;
            }

            batch.push(WriteOp::PutPosting {
                id: Uuid::new_v4(),
                category_id,
                category: category_title.clone(),
                posting,
            });
            summary.postings_written += 1;
            self.commit_if_full(&mut batch, &mut summary).await?;
        }

        if !batch.is_empty() {
            self.store.commit(std::mem::take(&mut batch)).await?;
            summary.batches_committed += 1;
        }

        tracing::info!(
            postings = summary.postings_written,
            skipped = summary.postings_skipped,
            batches = summary.batches_committed,
            "CSV import finished"
        );
        Ok(summary)
    }

    async fn commit_if_full(
        &self,
        batch: &mut WriteBatch,
        summary: &mut ImportSummary,
    ) -> std::result::Result<(), StoreError> {
        if batch.len() >= self.batch_op_limit {
            self.store.commit(std::mem::take(batch)).await?;
            summary.batches_committed += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::NewCategory;
    use crate::models::posting::NewPosting;
    use crate::store::MemoryStore;

    fn category(title: &str) -> NewCategory {
        NewCategory {
            title: title.to_string(),
            information: Some("desc".to_string()),
            created_at: Some("2024-01-01".to_string()),
        }
    }

    fn posting(job_title: &str) -> NewPosting {
        NewPosting {
            job_title: job_title.to_string(),
            job_company: Some("Acme".to_string()),
            ..NewPosting::default()
        }
    }

    fn import(title: &str, postings: Vec<NewPosting>) -> ImportBatch {
        ImportBatch {
            category: category(title),
            postings,
        }
    }

    #[tokio::test]
    async fn commits_ceiling_sized_units_and_flushes_the_tail() {
        let store = MemoryStore::new();
        let service = ImportService::new(store.clone(), 5);

        let postings = (0..12).map(|i| posting(&format!("Job {i}"))).collect();
        let summary = service.run(import("Eng", postings)).await.unwrap();

        // 1 category + 12 postings = 13 ops under a ceiling of 5.
        assert_eq!(store.commit_ops(), vec![5, 5, 3]);
        assert_eq!(store.category_count(), 1);
        assert_eq!(store.posting_count(), 12);
        assert_eq!(summary.batches_committed, 3);
        assert_eq!(summary.postings_written, 12);
        assert_eq!(summary.postings_skipped, 0);
    }

    #[tokio::test]
    async fn exact_multiple_of_the_ceiling_needs_no_tail_flush() {
        let store = MemoryStore::new();
        let service = ImportService::new(store.clone(), 5);

        let postings = (0..9).map(|i| posting(&format!("Job {i}"))).collect();
        let summary = service.run(import("Eng", postings)).await.unwrap();

        assert_eq!(store.commit_ops(), vec![5, 5]);
        assert_eq!(summary.batches_committed, 2);
    }

    #[tokio::test]
    async fn postings_with_blank_titles_are_skipped_not_fatal() {
        let store = MemoryStore::new();
        let service = ImportService::new(store.clone(), 450);

        let postings = vec![posting("Dev"), posting("   "), posting(""), posting("Ops")];
        let summary = service.run(import("Eng", postings)).await.unwrap();

        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.postings_written, 2);
        assert_eq!(summary.postings_skipped, 2);
        assert_eq!(store.posting_count(), 2);
    }

    #[tokio::test]
    async fn blank_category_title_skips_the_whole_import() {
        let store = MemoryStore::new();
        let service = ImportService::new(store.clone(), 450);

        let summary = service
            .run(import("  ", vec![posting("Dev"), posting("Ops")]))
            .await
            .unwrap();

        assert!(store.commit_ops().is_empty());
        assert_eq!(summary.categories_written, 0);
        assert_eq!(summary.postings_written, 0);
        assert_eq!(summary.postings_skipped, 2);
    }

    #[tokio::test]
    async fn denormalized_category_title_is_stamped_on_postings() {
        let store = MemoryStore::new();
        let service = ImportService::new(store.clone(), 450);

        service
            .run(import("Eng", vec![posting("Dev")]))
            .await
            .unwrap();

        let categories = store.list_categories().await.unwrap();
        let postings = store.list_postings(categories[0].id).await.unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].category, "Eng");
        assert_eq!(postings[0].job_title, "Dev");
    }

    #[tokio::test]
    async fn commit_failure_aborts_but_keeps_prior_units() {
        let store = MemoryStore::new();
        store.fail_after(1);
        let service = ImportService::new(store.clone(), 2);

        let postings = (0..5).map(|i| posting(&format!("Job {i}"))).collect();
        let result = service.run(import("Eng", postings)).await;

        assert!(result.is_err());
        // The first unit stays committed; nothing after it lands.
        assert_eq!(store.commit_ops(), vec![2]);
    }
}
