use crate::models::CatalogItem;
use crate::service::lexicon::QuantityLexicon;
use crate::service::normalizer::normalize;
use crate::service::similarity::lcs_ratio;
use regex::Regex;

/// 模糊匹配阈值 (含边界)
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// 匹配策略, 按优先级排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    QuantityBeforeName,
    QuantityAfterName,
    BareName,
    SplitBoundary,
    AllWordsPresent,
    Fuzzy,
}

type StrategyFn = fn(&ItemMatcher, &str, &QuantityLexicon) -> Option<u32>;

/// 策略表: 依次尝试, 第一个成功的生效
pub const STRATEGIES: [(MatchStrategy, StrategyFn); 6] = [
    (MatchStrategy::QuantityBeforeName, quantity_before_name),
    (MatchStrategy::QuantityAfterName, quantity_after_name),
    (MatchStrategy::BareName, bare_name),
    (MatchStrategy::SplitBoundary, split_boundary),
    (MatchStrategy::AllWordsPresent, all_words_present),
    (MatchStrategy::Fuzzy, fuzzy),
];

/// 单个菜单项的预编译匹配器
#[derive(Debug, Clone)]
pub struct ItemMatcher {
    item: CatalogItem,
    name: String,
    words: Vec<String>,
    before: Regex,
    after: Regex,
    bare: Regex,
    split: Regex,
}

impl ItemMatcher {
    pub fn new(item: &CatalogItem, lexicon: &QuantityLexicon) -> Result<Self, regex::Error> {
        let name = normalize(&item.name);
        let words: Vec<String> = name.split(' ').map(str::to_string).collect();

        let qty = quantity_group(lexicon);
        let exact = regex::escape(&name);
        let first = regex::escape(words.first().map_or("", String::as_str));
        let last = regex::escape(words.last().map_or("", String::as_str));

        Ok(Self {
            item: item.clone(),
            before: Regex::new(&format!(r"\b{qty}\s+{exact}s?\b"))?,
            after: Regex::new(&format!(r"\b{exact}s?\s+{qty}\b"))?,
            bare: Regex::new(&format!(r"\b{exact}s?\b"))?,
            split: Regex::new(&format!(r"\b{qty}\s+{first}\b.*\b{last}s?\b"))?,
            name,
            words,
        })
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// 按策略表匹配已规范化的文本, 返回命中的策略和数量
    pub fn detect(&self, text: &str, lexicon: &QuantityLexicon) -> Option<(MatchStrategy, u32)> {
        STRATEGIES
            .iter()
            .find_map(|(strategy, apply)| apply(self, text, lexicon).map(|qty| (*strategy, qty)))
    }

    /// 未命中时返回 0
    pub fn match_quantity(&self, text: &str, lexicon: &QuantityLexicon) -> u32 {
        self.detect(text, lexicon).map_or(0, |(_, qty)| qty)
    }
}

/// 对单个菜单项做一次性匹配 (不复用编译结果)
pub fn match_item(normalized_text: &str, item: &CatalogItem, lexicon: &QuantityLexicon) -> u32 {
    match ItemMatcher::new(item, lexicon) {
        Ok(matcher) => matcher.match_quantity(normalized_text, lexicon),
        Err(e) => {
            tracing::error!("Failed to build matcher for {}: {}", item.name, e);
            0
        }
    }
}

fn quantity_group(lexicon: &QuantityLexicon) -> String {
    let mut alternatives = vec!["[0-9]+".to_string()];
    alternatives.extend(lexicon.words().map(regex::escape));
    format!("({})", alternatives.join("|"))
}

fn captured_quantity(re: &Regex, text: &str, lexicon: &QuantityLexicon) -> Option<u32> {
    re.captures(text)
        .map(|caps| caps.get(1).map_or(1, |m| lexicon.resolve(m.as_str())))
}

fn quantity_before_name(m: &ItemMatcher, text: &str, lexicon: &QuantityLexicon) -> Option<u32> {
    captured_quantity(&m.before, text, lexicon)
}

fn quantity_after_name(m: &ItemMatcher, text: &str, lexicon: &QuantityLexicon) -> Option<u32> {
    captured_quantity(&m.after, text, lexicon)
}

fn bare_name(m: &ItemMatcher, text: &str, _: &QuantityLexicon) -> Option<u32> {
    m.bare.is_match(text).then_some(1)
}

fn split_boundary(m: &ItemMatcher, text: &str, lexicon: &QuantityLexicon) -> Option<u32> {
    captured_quantity(&m.split, text, lexicon)
}

fn all_words_present(m: &ItemMatcher, text: &str, _: &QuantityLexicon) -> Option<u32> {
    m.words.iter().all(|w| text.contains(w.as_str())).then_some(1)
}

fn fuzzy(m: &ItemMatcher, text: &str, _: &QuantityLexicon) -> Option<u32> {
    (lcs_ratio(text, &m.name) >= FUZZY_THRESHOLD).then_some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(name: &str, text: &str) -> Option<(MatchStrategy, u32)> {
        let lexicon = QuantityLexicon::default();
        let matcher = ItemMatcher::new(&CatalogItem::new(name, 100), &lexicon).unwrap();
        matcher.detect(text, &lexicon)
    }

    #[test]
    fn test_quantity_before_name() {
        assert_eq!(detect("Coke", "two coke"), Some((MatchStrategy::QuantityBeforeName, 2)));
        assert_eq!(detect("Coke", "3 cokes please"), Some((MatchStrategy::QuantityBeforeName, 3)));
        assert_eq!(detect("Mango Juice", "an mango juice"), Some((MatchStrategy::QuantityBeforeName, 1)));
    }

    #[test]
    fn test_quantity_after_name() {
        assert_eq!(detect("Coke", "coke two"), Some((MatchStrategy::QuantityAfterName, 2)));
        assert_eq!(detect("Sprite", "sprites 4"), Some((MatchStrategy::QuantityAfterName, 4)));
    }

    #[test]
    fn test_before_takes_priority_over_after() {
        assert_eq!(detect("Coke", "two coke three"), Some((MatchStrategy::QuantityBeforeName, 2)));
    }

    #[test]
    fn test_bare_name_with_plural() {
        assert_eq!(detect("Coke", "cokes"), Some((MatchStrategy::BareName, 1)));
        assert_eq!(detect("Coke", "i want coke now"), Some((MatchStrategy::BareName, 1)));
    }

    #[test]
    fn test_bare_name_requires_word_boundary() {
        // "cokeberry" 不是整词, 但所有词都作为子串出现
        assert_eq!(detect("Coke", "cokeberry"), Some((MatchStrategy::AllWordsPresent, 1)));
    }

    #[test]
    fn test_split_boundary() {
        assert_eq!(
            detect("Chicken Biryani", "two chicken delicious biryani"),
            Some((MatchStrategy::SplitBoundary, 2))
        );
        assert_eq!(
            detect("Chicken Biryani", "5 chicken and some spicy biryanis"),
            Some((MatchStrategy::SplitBoundary, 5))
        );
    }

    #[test]
    fn test_all_words_present_in_any_order() {
        assert_eq!(detect("Mango Juice", "juice of mango"), Some((MatchStrategy::AllWordsPresent, 1)));
    }

    #[test]
    fn test_zero_quantity_resolves_to_one() {
        assert_eq!(detect("Coke", "0 coke"), Some((MatchStrategy::QuantityBeforeName, 1)));
    }

    #[test]
    fn test_fuzzy_boundary() {
        // lcs("cokxyz", "coke") = 3 -> 6 / 10 = 0.6
        assert_eq!(detect("Coke", "cokxyz"), Some((MatchStrategy::Fuzzy, 1)));
        // lcs("cokxyzw", "coke") = 3 -> 6 / 11 < 0.6
        assert_eq!(detect("Coke", "cokxyzw"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(detect("Sprite", "hello there"), None);
        assert_eq!(detect("Sprite", ""), None);
    }

    #[test]
    fn test_match_item_returns_zero_when_absent() {
        let lexicon = QuantityLexicon::default();
        assert_eq!(match_item("nothing here", &CatalogItem::new("Coke", 45), &lexicon), 0);
        assert_eq!(match_item("coke seven", &CatalogItem::new("Coke", 45), &lexicon), 7);
    }

    #[test]
    fn test_custom_lexicon_words() {
        let lexicon = QuantityLexicon::new([("dozen", 12)]);
        let matcher = ItemMatcher::new(&CatalogItem::new("Samosa", 15), &lexicon).unwrap();
        assert_eq!(matcher.match_quantity("dozen samosas", &lexicon), 12);
        // "two" 不在自定义词表中, 退化为裸名匹配
        assert_eq!(matcher.match_quantity("two samosas", &lexicon), 1);
    }

    #[test]
    fn test_multi_word_lexicon_entry() {
        let lexicon = QuantityLexicon::new([("a-couple", 2)]);
        let matcher = ItemMatcher::new(&CatalogItem::new("Coke", 45), &lexicon).unwrap();
        assert_eq!(matcher.match_quantity(&normalize("A couple of... no, a couple cokes!"), &lexicon), 2);
    }
}
