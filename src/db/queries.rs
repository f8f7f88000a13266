use crate::models::{OrderRecord, OrderResult};
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use std::io::Write;
use std::time::Duration;

/// 插入超时
const INSERT_TIMEOUT: Duration = Duration::from_secs(30);

/// 建表 (不存在时)
pub async fn ensure_orders_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id SERIAL PRIMARY KEY,
            items_json TEXT NOT NULL,
            total_cost NUMERIC(10,2) NOT NULL,
            email VARCHAR(120),
            transcript TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// 插入一条订单, 返回新订单ID
pub async fn insert_order(
    pool: &PgPool,
    order: &OrderResult,
    email: Option<&str>,
    transcript: &str,
) -> Result<i32, crate::db::StoreError> {
    let items_json = serde_json::to_string(&order.items)?;
    let total_cost = BigDecimal::from(order.total);

    let start_time = std::time::Instant::now();
    let execute_result = tokio::time::timeout(
        INSERT_TIMEOUT,
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO orders (items_json, total_cost, email, transcript)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(items_json)
        .bind(total_cost)
        .bind(email)
        .bind(transcript)
        .fetch_one(pool),
    )
    .await;

    match execute_result {
        Ok(Ok(id)) => {
            tracing::info!("✓ Order {} inserted, took {:?}", id, start_time.elapsed());
            Ok(id)
        }
        Ok(Err(e)) => {
            tracing::error!("✗ Order insert failed after {:?}: {:?}", start_time.elapsed(), e);
            Err(e.into())
        }
        Err(_) => {
            tracing::error!("✗ Order insert timed out (>{:?})", INSERT_TIMEOUT);
            Err(crate::db::StoreError::Timeout(INSERT_TIMEOUT))
        }
    }
}

/// 查询最近的订单 (新订单在前)
pub async fn list_recent_orders(pool: &PgPool, limit: i64) -> Result<Vec<OrderRecord>, sqlx::Error> {
    sqlx::query_as::<_, OrderRecord>(
        r#"
        SELECT id, items_json, total_cost, email, transcript, created_at
        FROM orders
        ORDER BY created_at DESC, id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// 导出订单到 CSV (带表头)
pub fn export_to_csv<W: Write>(records: &[OrderRecord], output: W) -> Result<W, csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["id", "created_at", "email", "total_cost", "items_json", "transcript"])?;

    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.created_at.to_rfc3339(),
            record.email.clone().unwrap_or_default(),
            record.total_cost.to_string(),
            record.items_json.clone(),
            record.transcript.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
