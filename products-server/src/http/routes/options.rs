//! Product option endpoints, nested under /products/{product_id}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::ProductOption;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::OptionDraft;

/// Create/update option request
#[derive(Deserialize)]
pub struct OptionRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Option response
#[derive(Serialize)]
pub struct OptionResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<ProductOption> for OptionResponse {
    fn from(o: ProductOption) -> Self {
        Self {
            id: o.id,
            product_id: o.product_id,
            name: o.name,
            description: o.description,
        }
    }
}

/// List wrapper
#[derive(Serialize)]
pub struct OptionListResponse {
    pub items: Vec<OptionResponse>,
}

/// GET /products/{product_id}/options
async fn list_options(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<OptionListResponse>, ApiError> {
    let options = state.options.list(product_id).await?;

    Ok(Json(OptionListResponse {
        items: options.into_iter().map(OptionResponse::from).collect(),
    }))
}

/// GET /products/{product_id}/options/{id}
async fn get_option(
    State(state): State<Arc<AppState>>,
    Path((product_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<OptionResponse>, ApiError> {
    let option = state.options.get(product_id, id).await?;
    Ok(Json(OptionResponse::from(option)))
}

/// POST /products/{product_id}/options
async fn create_option(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<OptionRequest>,
) -> Result<&'static str, ApiError> {
    let draft = OptionDraft::new(&req.name, req.description)?;
    state.options.create(product_id, draft).await?;

    Ok("Option added successfully")
}

/// PUT /products/{product_id}/options/{id}
async fn update_option(
    State(state): State<Arc<AppState>>,
    Path((product_id, id)): Path<(Uuid, Uuid)>,
    Json(req): Json<OptionRequest>,
) -> Result<&'static str, ApiError> {
    let draft = OptionDraft::new(&req.name, req.description)?;
    state.options.update(product_id, id, draft).await?;

    Ok("Option updated successfully")
}

/// DELETE /products/{product_id}/options/{id}
async fn delete_option(
    State(state): State<Arc<AppState>>,
    Path((product_id, id)): Path<(Uuid, Uuid)>,
) -> Result<&'static str, ApiError> {
    state.options.delete(product_id, id).await?;
    Ok("Option deleted successfully")
}

/// Option routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/products/{product_id}/options",
            get(list_options).post(create_option),
        )
        .route(
            "/products/{product_id}/options/{id}",
            get(get_option).put(update_option).delete(delete_option),
        )
}
