use crate::db::OrderStore;
use crate::models::{DetectedLine, OrderResult};
use crate::notify::Notifier;
use crate::service::extractor::OrderExtractor;
use serde::Serialize;
use std::sync::Arc;

pub const NO_ITEMS_DETECTED: &str = "No menu items detected.";

/// 下单结果: 解析结果 + 持久化/通知状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderOutcome {
    pub saved: bool,
    pub items: Vec<DetectedLine>,
    pub total: u64,
    pub email_sent: bool,
    pub error: String,
}

impl OrderOutcome {
    fn nothing_detected() -> Self {
        Self {
            saved: false,
            items: Vec::new(),
            total: 0,
            email_sent: false,
            error: NO_ITEMS_DETECTED.to_string(),
        }
    }
}

/// 下单服务: 解析 -> 保存 -> 通知
pub struct OrderService {
    extractor: Arc<OrderExtractor>,
    store: Arc<dyn OrderStore>,
    notifier: Arc<dyn Notifier>,
}

impl OrderService {
    pub fn new(
        extractor: Arc<OrderExtractor>,
        store: Arc<dyn OrderStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            extractor,
            store,
            notifier,
        }
    }

    pub fn store(&self) -> &Arc<dyn OrderStore> {
        &self.store
    }

    /// 解析放在阻塞线程池中执行, 长文本不会占住异步工作线程
    pub async fn parse(&self, transcript: &str) -> OrderResult {
        let extractor = self.extractor.clone();
        let transcript = transcript.to_string();

        match tokio::task::spawn_blocking(move || extractor.parse(&transcript)).await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!("Transcript parsing task failed: {}", e);
                OrderResult::empty()
            }
        }
    }

    /// 保存和通知相互独立, 任一失败不影响另一个; 两者都失败时优先报告保存错误
    pub async fn place_order(&self, transcript: &str, email: Option<&str>) -> OrderOutcome {
        let order = self.parse(transcript).await;
        if order.is_empty() {
            tracing::info!("No menu items detected in transcript {:?}", transcript);
            return OrderOutcome::nothing_detected();
        }

        tracing::info!("Parsed order: {} line(s), total {}", order.items.len(), order.total);

        let (saved, save_err) = match self.store.save(&order, email, transcript).await {
            Ok(()) => (true, String::new()),
            Err(e) => {
                tracing::error!("Failed to save order: {}", e);
                (false, e.to_string())
            }
        };

        let (email_sent, email_err) = match email {
            Some(to) => match self.notifier.send_confirmation(to, &order).await {
                Ok(()) => (true, String::new()),
                Err(e) => {
                    tracing::warn!("Failed to send confirmation to {}: {}", to, e);
                    (false, e.to_string())
                }
            },
            None => (false, String::new()),
        };

        let error = if save_err.is_empty() { email_err } else { save_err };

        OrderOutcome {
            saved,
            items: order.items,
            total: order.total,
            email_sent,
            error,
        }
    }
}
