//! Product catalog HTTP service.
//!
//! Requests flow handler → `ProductService` → `ProductRepository`; the
//! repository is either Postgres (`PgProductRepository`) or process memory.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Builds the full application router with its state attached.
pub fn app(state: AppState) -> Router {
    routes::create_router()
        .route("/", get(|| async { "Product API" }))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
