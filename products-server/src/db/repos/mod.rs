//! Repository implementations for database access
//!
//! Each operation maps to a single SQL statement; missing rows are reported
//! as `DbError::NotFound` rather than silent no-ops. The store traits are the
//! seam that lets HTTP handlers run against a test double instead of Postgres.

#[cfg(test)]
pub(crate) mod memory;
pub mod options;
pub mod products;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{OptionDraft, ProductDraft};

pub use options::{OptionRepo, ProductOption};
pub use products::{Product, ProductRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Option insert referenced a product that does not exist
    #[error("product '{id}' does not exist")]
    MissingProduct { id: String },
}

/// Product CRUD operations
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, newest first.
    async fn list(&self) -> Result<Vec<Product>, DbError>;

    /// Products whose name contains `name`, case-insensitively.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, DbError>;

    async fn get(&self, id: Uuid) -> Result<Product, DbError>;

    async fn create(&self, draft: ProductDraft) -> Result<Product, DbError>;

    /// Update all fields of an existing product. The id never changes.
    async fn update(&self, id: Uuid, draft: ProductDraft) -> Result<(), DbError>;

    /// Delete a product and, via FK cascade, all of its options.
    async fn delete(&self, id: Uuid) -> Result<(), DbError>;
}

/// Product option CRUD operations, always scoped to an owning product
#[async_trait]
pub trait OptionStore: Send + Sync {
    async fn list(&self, product_id: Uuid) -> Result<Vec<ProductOption>, DbError>;

    /// A single option; ownership mismatch reports NotFound.
    async fn get(&self, product_id: Uuid, id: Uuid) -> Result<ProductOption, DbError>;

    async fn create(
        &self,
        product_id: Uuid,
        draft: OptionDraft,
    ) -> Result<ProductOption, DbError>;

    async fn update(&self, product_id: Uuid, id: Uuid, draft: OptionDraft)
        -> Result<(), DbError>;

    async fn delete(&self, product_id: Uuid, id: Uuid) -> Result<(), DbError>;
}
