use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::posting::Posting;
use crate::store::{DocumentStore, StoreError, StoreResult, WriteBatch, WriteOp};

/// In-memory [`DocumentStore`] used by the test suites and local tooling.
///
/// Every committed unit's op count is recorded so batching behavior can be
/// asserted, and commits can be made to fail after a given point to exercise
/// the partial-import failure mode.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    postings: HashMap<Uuid, Vec<Posting>>,
    commit_ops: Vec<usize>,
    fail_after: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every commit after the first `commits` successful ones.
    pub fn fail_after(&self, commits: usize) {
        self.inner.lock().unwrap().fail_after = Some(commits);
    }

    /// Op counts of committed units, in commit order.
    pub fn commit_ops(&self) -> Vec<usize> {
        self.inner.lock().unwrap().commit_ops.clone()
    }

    pub fn category_count(&self) -> usize {
        self.inner.lock().unwrap().categories.len()
    }

    pub fn posting_count(&self) -> usize {
        self.inner.lock().unwrap().postings.values().map(Vec::len).sum()
    }
}

impl DocumentStore for MemoryStore {
    async fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(allowed) = inner.fail_after {
            if inner.commit_ops.len() >= allowed {
                return Err(StoreError::Unavailable("commit rejected".to_string()));
            }
        }

        let ops = batch.into_ops();
        inner.commit_ops.push(ops.len());

        let now = Utc::now();
        for op in ops {
            match op {
                WriteOp::PutCategory { id, category } => {
                    inner.categories.push(Category {
                        id,
                        title: category.title,
                        information: category.information,
                        created_at: category.created_at,
                        imported_at: now,
                    });
                }
                WriteOp::PutPosting {
                    id,
                    category_id,
                    category,
                    posting,
                } => {
                    inner.postings.entry(category_id).or_default().push(Posting {
                        id,
                        category_id,
                        category,
                        job_company: posting.job_company,
                        job_title: posting.job_title,
                        job_description: posting.job_description,
                        contact_email: posting.contact_email,
                        contact_number: posting.contact_number,
                        address: posting.address,
                        city: posting.city,
                        state: posting.state,
                        postal_code: posting.postal_code,
                        salary: posting.salary,
                        image_url: posting.image_url,
                        tags: posting.tags,
                        created_at: posting.created_at,
                        imported_at: now,
                    });
                }
            }
        }

        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.inner.lock().unwrap().categories.clone())
    }

    async fn get_category(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_postings(&self, category_id: Uuid) -> StoreResult<Vec<Posting>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.postings.get(&category_id).cloned().unwrap_or_default())
    }

    async fn delete_category(&self, id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.categories.len();
        inner.categories.retain(|c| c.id != id);
        inner.postings.remove(&id);
        Ok(inner.categories.len() < before)
    }
}
