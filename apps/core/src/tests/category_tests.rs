//! Category Extractor Tests
//!
//! Covers detection for every category in the table, output ordering,
//! and deduplication.

use crate::categories::CategoryExtractor;

#[cfg(test)]
mod detection_tests {
    use super::*;

    #[test]
    fn test_every_category_detectable() {
        let extractor = CategoryExtractor::new();

        let cases = vec![
            ("popcorn for movie night", "Snacks"),
            ("fresh juice bottles", "Beverages"),
            ("lavender body wash", "Bath Products"),
            ("spa slippers", "Amenities"),
            ("leather notebook", "Stationery"),
            ("soy candle", "Candles"),
            ("throw pillow", "Decor"),
        ];

        for (query, expected) in cases {
            let labels = extractor.extract_labels(query);
            assert_eq!(labels, vec![expected], "Wrong category for '{}'", query);
        }
    }

    #[test]
    fn test_plural_and_singular_keywords() {
        let extractor = CategoryExtractor::new();

        assert_eq!(extractor.extract_labels("towel"), vec!["Amenities"]);
        assert_eq!(extractor.extract_labels("towels"), vec!["Amenities"]);
        assert_eq!(extractor.extract_labels("candle"), vec!["Candles"]);
        assert_eq!(extractor.extract_labels("candles"), vec!["Candles"]);
    }

    #[test]
    fn test_substring_matching() {
        let extractor = CategoryExtractor::new();

        // "tea" matched inside "teapot", containment is intentional
        assert_eq!(extractor.extract_labels("teapot set"), vec!["Beverages"]);
    }

    #[test]
    fn test_no_categories() {
        let extractor = CategoryExtractor::new();

        let queries = vec!["rakka chocolate", "blue mug", "wool blanket", ""];

        for query in queries {
            assert!(
                extractor.extract(query).is_empty(),
                "Expected no categories for '{}'",
                query
            );
        }
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_output_order_is_table_order() {
        let extractor = CategoryExtractor::new();

        // Text mentions Decor first, Snacks last; output follows the table
        let labels = extractor.extract_labels("pillows, candles, coffee and snacks");
        assert_eq!(labels, vec!["Snacks", "Beverages", "Candles", "Decor"]);
    }

    #[test]
    fn test_spec_example() {
        let extractor = CategoryExtractor::new();

        let labels = extractor.extract_labels("I need soap and candles");
        assert_eq!(labels, vec!["Bath Products", "Candles"]);
    }

    #[test]
    fn test_deduplication() {
        let extractor = CategoryExtractor::new();

        // Three Beverages keywords, one label
        let labels = extractor.extract_labels("coffee tea juice");
        assert_eq!(labels, vec!["Beverages"]);
    }

    #[test]
    fn test_idempotence() {
        let extractor = CategoryExtractor::new();

        let query = "soap and candles for the bath";
        assert_eq!(extractor.extract(query), extractor.extract(query));
    }

    #[test]
    fn test_match_serialization() {
        let extractor = CategoryExtractor::new();

        let matches = extractor.extract("organic soap");
        let json = serde_json::to_string(&matches).expect("serializable matches");

        assert!(json.contains("\"label\":\"Bath Products\""));
        assert!(json.contains("\"matched_keyword\":\"soap\""));
    }
}
