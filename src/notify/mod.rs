use crate::models::OrderResult;
use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const CONFIRMATION_SUBJECT: &str = "Your Order Confirmation";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail relay rejected the message with status {0}")]
    Rejected(u16),
}

/// 订单确认通知
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_confirmation(&self, to: &str, order: &OrderResult) -> Result<(), NotifyError>;
}

/// 渲染后的确认邮件
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub subject: String,
    pub html: String,
}

impl Confirmation {
    pub fn render(order: &OrderResult) -> Self {
        let item_lines: String = order
            .items
            .iter()
            .map(|line| {
                format!(
                    "<li>{} × {} = {}</li>",
                    escape_html(&line.name),
                    line.qty,
                    line.line_total()
                )
            })
            .collect();

        let html = format!(
            "<h2>Thanks for your order!</h2>\n\
             <p>Time: {}</p>\n\
             <ul>{}</ul>\n\
             <p><strong>Total: {}</strong></p>\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            item_lines,
            order.total
        );

        Self {
            subject: CONFIRMATION_SUBJECT.to_string(),
            html,
        }
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 未配置中继时使用: 只写日志
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_confirmation(&self, to: &str, order: &OrderResult) -> Result<(), NotifyError> {
        let confirmation = Confirmation::render(order);
        tracing::info!(
            "Confirmation for {} (no mail relay configured): {}\n{}",
            to,
            confirmation.subject,
            confirmation.html
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// 通过 HTTP 邮件中继发送
pub struct RelayNotifier {
    client: Client,
    relay_url: String,
    sender: String,
}

impl RelayNotifier {
    /// 超时覆盖整个请求 (连接 + 等待响应)
    pub fn new(relay_url: String, sender: String, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            relay_url,
            sender,
        })
    }
}

#[async_trait]
impl Notifier for RelayNotifier {
    async fn send_confirmation(&self, to: &str, order: &OrderResult) -> Result<(), NotifyError> {
        let confirmation = Confirmation::render(order);
        let message = RelayMessage {
            from: &self.sender,
            to,
            subject: &confirmation.subject,
            html: &confirmation.html,
        };

        let response = self.client.post(&self.relay_url).json(&message).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status.as_u16()));
        }

        tracing::info!("Confirmation sent to {} via {}", to, self.relay_url);
        Ok(())
    }
}
