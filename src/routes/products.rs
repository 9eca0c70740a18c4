use axum::{
    routing::get,
    Router,
};
use crate::handlers::product::{
    check_stock, create_product, delete_product, get_product, get_products,
    get_products_sorted_by_price, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/sorted-by-price", get(get_products_sorted_by_price))
        .route("/products/{id}", get(get_product).put(update_product).delete(delete_product))
        .route("/products/{id}/check-stock", get(check_stock))
}
