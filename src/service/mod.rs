pub mod aggregator;
pub mod extractor;
pub mod lexicon;
pub mod matcher;
pub mod normalizer;
pub mod order_service;
pub mod similarity;

pub use aggregator::aggregate;
pub use extractor::{parse_order, ExtractorError, OrderExtractor};
pub use lexicon::QuantityLexicon;
pub use matcher::{match_item, ItemMatcher, MatchStrategy};
pub use normalizer::normalize;
pub use order_service::{OrderOutcome, OrderService, NO_ITEMS_DETECTED};
