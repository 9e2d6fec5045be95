//! Database migrations for the products schema

use sqlx::PgPool;

use super::repos::DbError;

/// Run all migrations. Idempotent; executed at startup.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running products migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            price NUMERIC(18,2) NOT NULL,
            delivery_price NUMERIC(18,2) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Options are exclusively owned; deleting a product removes them
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product_options (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Products migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_product_options_product ON product_options(product_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_name ON products(name)")
        .execute(pool)
        .await?;

    Ok(())
}
