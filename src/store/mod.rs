use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::models::category::{Category, NewCategory};
use crate::models::posting::{NewPosting, Posting};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Write error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Write error: store unavailable: {0}")]
    Unavailable(String),
}

/// A single write inside an atomic unit-of-work.
#[derive(Debug, Clone)]
pub enum WriteOp {
    PutCategory {
        id: Uuid,
        category: NewCategory,
    },
    PutPosting {
        id: Uuid,
        category_id: Uuid,
        /// Denormalized parent title stored on the posting document.
        category: String,
        posting: NewPosting,
    },
}

/// Ordered set of writes committed together. The store applies all of it or
/// none of it; callers keep it under the backend's per-batch op ceiling.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn push(&mut self, op: WriteOp) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

/// Hierarchical document store: `categories/{id}` parent documents, each
/// with a `posting` sub-collection.
///
/// Futures are `Send` so handlers stay spawnable when generic over the
/// store implementation.
pub trait DocumentStore: Clone + Send + Sync + 'static {
    /// Apply one unit-of-work atomically.
    fn commit(&self, batch: WriteBatch) -> impl Future<Output = StoreResult<()>> + Send;

    fn list_categories(&self) -> impl Future<Output = StoreResult<Vec<Category>>> + Send;

    fn get_category(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<Category>>> + Send;

    /// Postings of one category, in import order.
    fn list_postings(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = StoreResult<Vec<Posting>>> + Send;

    /// Delete a category together with its postings; returns whether the
    /// category existed.
    fn delete_category(&self, id: Uuid) -> impl Future<Output = StoreResult<bool>> + Send;
}
