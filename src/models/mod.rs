pub mod catalog;
pub mod order;
pub mod record;

pub use catalog::{Catalog, CatalogError, CatalogItem};
pub use order::{DetectedLine, OrderResult};
pub use record::OrderRecord;
