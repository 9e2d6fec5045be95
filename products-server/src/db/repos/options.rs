//! Product option repository
//!
//! Every statement is scoped by both product id and option id so that an
//! option can never be read or mutated through the wrong product.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, OptionStore};
use crate::models::OptionDraft;

/// Foreign key violation (referenced row absent)
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Product option record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductOption {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Option repository backed by Postgres
#[derive(Clone)]
pub struct OptionRepo {
    pool: PgPool,
}

impl OptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OptionStore for OptionRepo {
    async fn list(&self, product_id: Uuid) -> Result<Vec<ProductOption>, DbError> {
        let options = sqlx::query_as::<_, ProductOption>(
            r#"
            SELECT id, product_id, name, description
            FROM product_options
            WHERE product_id = $1
            ORDER BY name
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }

    async fn get(&self, product_id: Uuid, id: Uuid) -> Result<ProductOption, DbError> {
        sqlx::query_as::<_, ProductOption>(
            r#"
            SELECT id, product_id, name, description
            FROM product_options
            WHERE id = $1 AND product_id = $2
            "#,
        )
        .bind(id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "option",
            id: id.to_string(),
        })
    }

    async fn create(
        &self,
        product_id: Uuid,
        draft: OptionDraft,
    ) -> Result<ProductOption, DbError> {
        let result = sqlx::query_as::<_, ProductOption>(
            r#"
            INSERT INTO product_options (id, product_id, name, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, name, description
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(product_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(option) => Ok(option),
            // FK violation means the owning product is absent
            Err(sqlx::Error::Database(db))
                if db.code().as_deref() == Some(PG_FOREIGN_KEY_VIOLATION) =>
            {
                Err(DbError::MissingProduct {
                    id: product_id.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(
        &self,
        product_id: Uuid,
        id: Uuid,
        draft: OptionDraft,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE product_options
            SET name = $3, description = $4
            WHERE id = $1 AND product_id = $2
            "#,
        )
        .bind(id)
        .bind(product_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "option",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, product_id: Uuid, id: Uuid) -> Result<(), DbError> {
        let result =
            sqlx::query("DELETE FROM product_options WHERE id = $1 AND product_id = $2")
                .bind(id)
                .bind(product_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "option",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{ProductRepo, ProductStore};
    use crate::db::{create_pool, migrations};
    use crate::models::ProductDraft;

    // Integration tests - run with DATABASE_URL set:
    // DATABASE_URL=postgres://... cargo test -p products-server -- --ignored

    async fn test_repos() -> (ProductRepo, OptionRepo) {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        (ProductRepo::new(pool.clone()), OptionRepo::new(pool))
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_option_for_missing_product_is_rejected() {
        let (_, options) = test_repos().await;
        let draft = OptionDraft::new("Small", None).unwrap();

        let err = options.create(Uuid::new_v4(), draft).await.unwrap_err();
        assert!(matches!(err, DbError::MissingProduct { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn deleting_product_cascades_to_options() {
        let (products, options) = test_repos().await;
        let product = products
            .create(
                ProductDraft::new("Cascade", None, "1".parse().unwrap(), "0".parse().unwrap())
                    .unwrap(),
            )
            .await
            .unwrap();
        options
            .create(product.id, OptionDraft::new("Small", None).unwrap())
            .await
            .unwrap();

        products.delete(product.id).await.unwrap();

        let remaining = options.list(product.id).await.unwrap();
        assert!(remaining.is_empty());
    }
}
