use serde::{Deserialize, Serialize};

/// 单个菜单项的识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedLine {
    pub name: String,
    pub price: u64,
    pub qty: u32,
}

impl DetectedLine {
    /// 该行小计 (price × qty)
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.qty))
    }
}

/// 聚合后的订单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub items: Vec<DetectedLine>,
    pub total: u64,
}

impl OrderResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
