pub mod handlers;

use crate::models::Catalog;
use crate::service::OrderService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

pub use handlers::{export_orders, health_check, menu, place_order};

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<OrderService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/menu", get(menu))
        .route("/api/order", post(place_order))
        .route("/api/orders/export", get(export_orders))
        .with_state(state)
        .layer(ServiceBuilder::new())
}
