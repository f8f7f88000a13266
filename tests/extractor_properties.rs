use std::collections::HashSet;
use voice_order::{parse_order, Catalog, CatalogItem, OrderExtractor, OrderResult, QuantityLexicon};

const TRANSCRIPTS: &[&str] = &[
    "",
    "two chicken biryani and a coke",
    "1 mango juice, 2 orange juices",
    "three prawn biryanis and sprite two",
    "an egg biryani please",
    "Special mixed biryani x 4",
    "i would like mutton biryani, paneer biryani and a veg biryani",
    "no coke",
    "coke coke coke",
    "!!!???",
];

fn assert_well_formed(result: &OrderResult) {
    let sum: u64 = result.items.iter().map(|l| l.price * u64::from(l.qty)).sum();
    assert_eq!(result.total, sum);

    let names: HashSet<&str> = result.items.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names.len(), result.items.len());
    assert!(result.items.iter().all(|l| l.qty > 0));
}

#[test]
fn test_results_are_well_formed_and_deterministic() {
    let catalog = Catalog::default_menu();
    let extractor = OrderExtractor::new(&catalog, QuantityLexicon::default()).unwrap();

    for transcript in TRANSCRIPTS {
        let first = extractor.parse(transcript);
        assert_well_formed(&first);
        assert_eq!(first, extractor.parse(transcript), "{transcript}");
        assert_eq!(first, parse_order(transcript, &catalog), "{transcript}");
    }
}

#[test]
fn test_items_only_come_from_catalog() {
    let catalog = Catalog::default_menu();
    let known: HashSet<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();

    for transcript in TRANSCRIPTS {
        for line in parse_order(transcript, &catalog).items {
            assert!(known.contains(line.name.as_str()), "{}", line.name);
        }
    }
}

#[test]
fn test_negation_is_not_understood() {
    // "no coke" 仍然识别为一份可乐
    let catalog = Catalog::new(vec![CatalogItem::new("Coke", 45)]).unwrap();
    assert_eq!(parse_order("no coke", &catalog).total, 45);
}

#[test]
fn test_repeated_mentions_do_not_multiply() {
    let catalog = Catalog::new(vec![CatalogItem::new("Coke", 45)]).unwrap();
    let result = parse_order("coke coke coke", &catalog);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].qty, 1);
}

#[test]
fn test_loaded_catalog_drives_matching() {
    let catalog = Catalog::from_json_str(r#"[{"name": "Masala Dosa", "price": 90}, {"name": "Filter Coffee", "price": 30}]"#)
        .unwrap();
    let result = parse_order("two masala dosas and a filter coffee", &catalog);
    assert_eq!(result.total, 2 * 90 + 30);
}
