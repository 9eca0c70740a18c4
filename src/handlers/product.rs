// src/handlers/product.rs
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::dtos::product::{
    ProductRequest, ProductResponse, SortQuery, StockQuery, StockResponse,
};
use crate::error::AppError;
use crate::state::AppState;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.products.get_all().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.get_by_id(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product (200, not 201)
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.create(payload.into()).await?;
    Ok(Json(ProductResponse::from(product)))
}

// PUT /products/{id} - Overwrite product fields
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.update(id, payload.into()).await?;
    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /products/{id}/check-stock?count=N
// A `count` that is not an integer answers 404, like a failed param conversion.
#[instrument(skip(state, query))]
pub async fn check_stock(
    Path(id): Path<i64>,
    query: Result<Query<StockQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<StockResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "Rejected check-stock query");
        AppError::not_found(format!("Invalid count: {}", e.body_text()))
    })?;
    let available = state.products.is_stock_available(id, query.count).await?;
    Ok(Json(StockResponse { available }))
}

// GET /products/sorted-by-price?sortOrder=asc|...
#[instrument(skip(state))]
pub async fn get_products_sorted_by_price(
    Query(query): Query<SortQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .products
        .get_all_sorted_by_price(query.sort_order.as_deref())
        .await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
