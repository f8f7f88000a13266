use crate::service::normalizer::normalize;
use indexmap::IndexMap;

/// 数量词表: 单词 -> 正整数
#[derive(Debug, Clone)]
pub struct QuantityLexicon {
    words: IndexMap<String, u32>,
}

impl QuantityLexicon {
    /// 词条与文本使用相同的规范化; 空词或零值的条目会被忽略
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let words = entries
            .into_iter()
            .map(|(word, value)| {
                let word: String = word.into();
                (normalize(&word), value)
            })
            .filter(|(word, value)| !word.is_empty() && *value > 0)
            .collect();
        Self { words }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.words.get(word).copied()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// 解析数量: 数字串按整数解析, 否则查词表, 都失败时为 1
    pub fn resolve(&self, token: &str) -> u32 {
        let parsed = if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            token.parse::<u32>().ok()
        } else {
            self.get(token)
        };

        match parsed {
            Some(qty) if qty > 0 => qty,
            _ => 1,
        }
    }
}

impl Default for QuantityLexicon {
    fn default() -> Self {
        Self::new([
            ("a", 1),
            ("an", 1),
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
            ("ten", 10),
        ])
    }
}
