//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::Product;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ProductDraft;

/// Create/update product request
#[derive(Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub delivery_price: Decimal,
}

impl ProductRequest {
    fn into_draft(self) -> Result<ProductDraft, ApiError> {
        Ok(ProductDraft::new(
            &self.name,
            self.description,
            self.price,
            self.delivery_price,
        )?)
    }
}

/// Product response
#[derive(Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub delivery_price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            delivery_price: p.delivery_price,
        }
    }
}

/// List wrapper
#[derive(Serialize)]
pub struct ProductListResponse {
    pub items: Vec<ProductResponse>,
}

/// Query parameters for product listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter on the product name
    pub name: Option<String>,
}

/// GET /products and GET /products?name=X
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = match params.name.as_deref() {
        Some(name) => state.products.find_by_name(name).await?,
        None => state.products.list().await?,
    };

    Ok(Json(ProductListResponse {
        items: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.products.get(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// POST /products
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let draft = req.into_draft()?;
    let product = state.products.create(draft).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// PUT /products/{id}
async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProductRequest>,
) -> Result<&'static str, ApiError> {
    let draft = req.into_draft()?;
    state.products.update(id, draft).await?;

    Ok("Product updated successfully")
}

/// DELETE /products/{id} - also removes the product's options
async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ApiError> {
    state.products.delete(id).await?;
    Ok("Product deleted successfully")
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
