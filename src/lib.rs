pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod notify;
pub mod service;

pub use config::AppConfig;
pub use db::create_pool;
pub use models::{Catalog, CatalogItem, DetectedLine, OrderResult};
pub use service::{parse_order, OrderExtractor, OrderService, QuantityLexicon};
