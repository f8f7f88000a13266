pub mod pool;
pub mod queries;
pub mod store;

pub use pool::create_pool;
pub use queries::export_to_csv;
pub use store::{OrderStore, PgOrderStore, StoreError};
