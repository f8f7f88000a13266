use crate::db::queries;
use crate::models::{OrderRecord, OrderResult};
use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to serialize order items: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),
}

/// 订单持久化
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn save(&self, order: &OrderResult, email: Option<&str>, transcript: &str) -> Result<(), StoreError>;

    async fn recent(&self, limit: i64) -> Result<Vec<OrderRecord>, StoreError>;
}

/// PostgreSQL 实现
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn save(&self, order: &OrderResult, email: Option<&str>, transcript: &str) -> Result<(), StoreError> {
        queries::ensure_orders_table(&self.pool).await?;
        queries::insert_order(&self.pool, order, email, transcript).await?;
        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<OrderRecord>, StoreError> {
        queries::ensure_orders_table(&self.pool).await?;
        Ok(queries::list_recent_orders(&self.pool, limit).await?)
    }
}
