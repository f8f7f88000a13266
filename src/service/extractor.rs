use crate::models::{Catalog, DetectedLine, OrderResult};
use crate::service::aggregator::aggregate;
use crate::service::lexicon::QuantityLexicon;
use crate::service::matcher::ItemMatcher;
use crate::service::normalizer::normalize;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("failed to compile pattern for {item}: {source}")]
    Pattern {
        item: String,
        #[source]
        source: regex::Error,
    },
}

/// 订单提取器: 菜单和数量词表在构造时编译, 之后只读共享
#[derive(Debug, Clone)]
pub struct OrderExtractor {
    matchers: Vec<ItemMatcher>,
    lexicon: QuantityLexicon,
}

impl OrderExtractor {
    pub fn new(catalog: &Catalog, lexicon: QuantityLexicon) -> Result<Self, ExtractorError> {
        let matchers = catalog
            .items()
            .iter()
            .map(|item| {
                ItemMatcher::new(item, &lexicon).map_err(|source| ExtractorError::Pattern {
                    item: item.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { matchers, lexicon })
    }

    /// 解析口述订单; 任何输入都返回结果, 最差为空订单
    pub fn parse(&self, transcript: &str) -> OrderResult {
        let text = normalize(transcript);
        if text.is_empty() {
            return OrderResult::empty();
        }

        // 各菜单项独立匹配, collect 保留菜单顺序
        let detections: Vec<DetectedLine> = self
            .matchers
            .par_iter()
            .filter_map(|matcher| {
                let (strategy, qty) = matcher.detect(&text, &self.lexicon)?;
                let item = matcher.item();
                tracing::debug!("Detected {} x{} via {:?}", item.name, qty, strategy);
                Some(DetectedLine {
                    name: item.name.clone(),
                    price: item.price,
                    qty,
                })
            })
            .collect();

        aggregate(detections)
    }
}

/// 使用默认数量词表解析订单
pub fn parse_order(transcript: &str, catalog: &Catalog) -> OrderResult {
    match OrderExtractor::new(catalog, QuantityLexicon::default()) {
        Ok(extractor) => extractor.parse(transcript),
        Err(e) => {
            tracing::error!("Order extractor unavailable: {}", e);
            OrderResult::empty()
        }
    }
}
