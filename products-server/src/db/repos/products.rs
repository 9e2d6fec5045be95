//! Product repository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, ProductStore};
use crate::models::ProductDraft;

/// Product record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub delivery_price: Decimal,
}

/// Product repository backed by Postgres
#[derive(Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, delivery_price FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, DbError> {
        // Case-insensitive substring match; an empty result is not an error
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, delivery_price
            FROM products
            WHERE name ILIKE '%' || $1 || '%'
            ORDER BY name
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get(&self, id: Uuid) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, delivery_price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "product",
            id: id.to_string(),
        })
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, name, description, price, delivery_price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, delivery_price
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.delivery_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: Uuid, draft: ProductDraft) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, delivery_price = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.delivery_price)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "product",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        // Options go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "product",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
