use crate::models::{DetectedLine, OrderResult};
use indexmap::IndexMap;

/// 按名称合并识别结果 (保留首次出现顺序), 并计算总价
pub fn aggregate<I>(detections: I) -> OrderResult
where
    I: IntoIterator<Item = DetectedLine>,
{
    let mut combined: IndexMap<String, DetectedLine> = IndexMap::new();

    for line in detections {
        if line.qty == 0 {
            continue;
        }
        combined
            .entry(line.name.clone())
            .and_modify(|existing| existing.qty = existing.qty.saturating_add(line.qty))
            .or_insert(line);
    }

    let items: Vec<DetectedLine> = combined.into_values().collect();
    let total = items
        .iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.line_total()));

    OrderResult { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: u64, qty: u32) -> DetectedLine {
        DetectedLine {
            name: name.to_string(),
            price,
            qty,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(Vec::new()), OrderResult::empty());
    }

    #[test]
    fn test_merges_duplicates_in_first_seen_order() {
        let result = aggregate(vec![
            line("Sprite", 45, 1),
            line("Coke", 45, 2),
            line("Sprite", 45, 3),
        ]);
        assert_eq!(result.items, vec![line("Sprite", 45, 4), line("Coke", 45, 2)]);
        assert_eq!(result.total, 270);
    }

    #[test]
    fn test_skips_zero_quantities() {
        let result = aggregate(vec![line("Coke", 45, 0)]);
        assert!(result.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_total_saturates() {
        let result = aggregate(vec![line("Gold", u64::MAX, 2)]);
        assert_eq!(result.total, u64::MAX);
    }
}
