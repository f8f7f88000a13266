use crate::service::normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// 菜单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: u64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("catalog item #{0} has no letters or digits in its name")]
    BlankName(usize),
    #[error("duplicate catalog item: {0}")]
    DuplicateName(String),
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed menu file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 有序菜单 (名称按规范化后唯一, 即大小写不敏感)
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let key = normalize(&item.name);
            if key.is_empty() {
                return Err(CatalogError::BlankName(idx));
            }
            if !seen.insert(key) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }

        Ok(Self { items })
    }

    /// 从 JSON 文件加载: `[{"name": "...", "price": 45}, ...]`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(content)?;
        Self::new(items)
    }

    /// 内置菜单: 8 种 biryani + 2 种汽水 + 2 种果汁
    pub fn default_menu() -> Self {
        let items = [
            ("Veg Biryani", 150),
            ("Chicken Biryani", 200),
            ("Fish Biryani", 250),
            ("Paneer Biryani", 180),
            ("Mutton Biryani", 300),
            ("Egg Biryani", 170),
            ("Special Mixed Biryani", 360),
            ("Prawn Biryani", 320),
            ("Coke", 45),
            ("Sprite", 45),
            ("Mango Juice", 70),
            ("Orange Juice", 70),
        ]
        .into_iter()
        .map(|(name, price)| CatalogItem::new(name, price))
        .collect();

        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
