use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 订单表 (orders)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i32,
    pub items_json: String,
    pub total_cost: BigDecimal,
    pub email: Option<String>,
    pub transcript: Option<String>,
    pub created_at: DateTime<Utc>,
}
