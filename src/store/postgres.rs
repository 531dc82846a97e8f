use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::category::Category;
use crate::models::posting::Posting;
use crate::store::{DocumentStore, StoreResult, WriteBatch, WriteOp};

const CATEGORY_COLUMNS: &str = "id, title, information, created_at, imported_at";
const POSTING_COLUMNS: &str = "id, category_id, category, job_company, job_title, \
     job_description, contact_email, contact_number, address, city, state, \
     postal_code, salary, image_url, tags, created_at, imported_at";

/// Production store backed by Postgres. One committed unit-of-work maps to
/// one transaction, so a unit is applied atomically or not at all.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl DocumentStore for PgStore {
    async fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        for op in batch.into_ops() {
            match op {
                WriteOp::PutCategory { id, category } => {
                    sqlx::query(
                        "INSERT INTO categories (id, title, information, created_at) \
                         VALUES ($1, $2, $3, $4)",
                    )
                    .bind(id)
                    .bind(category.title)
                    .bind(category.information)
                    .bind(category.created_at)
                    .execute(&mut *tx)
                    .await?;
                }
                WriteOp::PutPosting {
                    id,
                    category_id,
                    category,
                    posting,
                } => {
                    sqlx::query(
                        "INSERT INTO postings (id, category_id, category, job_company, \
                         job_title, job_description, contact_email, contact_number, \
                         address, city, state, postal_code, salary, image_url, tags, \
                         created_at) \
                         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                         $13, $14, $15, $16)",
                    )
                    .bind(id)
                    .bind(category_id)
                    .bind(category)
                    .bind(posting.job_company)
                    .bind(posting.job_title)
                    .bind(posting.job_description)
                    .bind(posting.contact_email)
                    .bind(posting.contact_number)
                    .bind(posting.address)
                    .bind(posting.city)
                    .bind(posting.state)
                    .bind(posting.postal_code)
                    .bind(posting.salary)
                    .bind(posting.image_url)
                    .bind(posting.tags)
                    .bind(posting.created_at)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY imported_at DESC, title"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn list_postings(&self, category_id: Uuid) -> StoreResult<Vec<Posting>> {
        let postings = sqlx::query_as::<_, Posting>(&format!(
            "SELECT {POSTING_COLUMNS} FROM postings WHERE category_id = $1 ORDER BY seq"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(postings)
    }

    async fn delete_category(&self, id: Uuid) -> StoreResult<bool> {
        // Postings go with the parent via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
