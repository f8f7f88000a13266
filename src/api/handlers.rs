use crate::api::AppState;
use crate::db::export_to_csv;
use axum::{
    extract::{Json, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// 请求体: 口述订单文本 + 可选邮箱
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    pub transcript: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub limit: Option<i64>,
}

const DEFAULT_EXPORT_LIMIT: i64 = 100;

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 菜单
pub async fn menu(State(state): State<AppState>) -> Response {
    Json(state.catalog.as_ref().clone()).into_response()
}

/// 下单: 解析文本, 保存订单, 发送确认
pub async fn place_order(State(state): State<AppState>, Json(req): Json<OrderRequest>) -> Response {
    let transcript = req.transcript.as_deref().unwrap_or_default().trim();
    let email = req.email.as_deref().map(str::trim).filter(|e| !e.is_empty());

    let outcome = state.orders.place_order(transcript, email).await;
    (StatusCode::OK, Json(outcome)).into_response()
}

/// 导出最近订单为 CSV
pub async fn export_orders(State(state): State<AppState>, Query(query): Query<ExportQuery>) -> Response {
    let limit = query.limit.unwrap_or(DEFAULT_EXPORT_LIMIT).max(0);

    let records = match state.orders.store().recent(limit).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Order export failed: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response();
        }
    };

    match export_to_csv(&records, Vec::new()) {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response(),
        Err(e) => {
            tracing::error!("CSV encoding failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}
