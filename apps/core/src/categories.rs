//! Category Extraction from search queries.
//!
//! Maps a free-text query onto product-category labels via a fixed ordered
//! keyword table. Output order is always table order, never match order.

use serde::{Deserialize, Serialize};

/// Fixed category table: label -> detection keywords. Iteration order of
/// this table is the output order of every extraction.
const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Snacks",
        &["snack", "snacks", "chips", "nuts", "cookies", "popcorn", "candy"],
    ),
    (
        "Beverages",
        &[
            "beverage",
            "beverages",
            "drink",
            "drinks",
            "coffee",
            "tea",
            "juice",
            "soda",
            "water",
        ],
    ),
    (
        "Bath Products",
        &[
            "soap",
            "soaps",
            "bath",
            "shampoo",
            "conditioner",
            "lotion",
            "body wash",
        ],
    ),
    (
        "Amenities",
        &[
            "amenity",
            "amenities",
            "toiletries",
            "towel",
            "towels",
            "slipper",
            "slippers",
        ],
    ),
    (
        "Stationery",
        &[
            "stationery",
            "pen",
            "pens",
            "pencil",
            "notepad",
            "notebook",
            "paper",
        ],
    ),
    ("Candles", &["candle", "candles"]),
    (
        "Decor",
        &["decor", "decoration", "decorations", "pillow", "cushion", "art"],
    ),
];

/// A detected category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    /// Human-readable category label
    pub label: String,
    /// First keyword from the category's list found in the query
    pub matched_keyword: String,
}

/// Category extractor over the fixed keyword table
pub struct CategoryExtractor;

impl Default for CategoryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryExtractor {
    /// Create a new category extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract categories from a query.
    ///
    /// Each category appears at most once, in table order, regardless of
    /// which keyword matched or where it occurred in the text. Empty or
    /// whitespace-only input produces an empty result.
    pub fn extract(&self, query: &str) -> Vec<CategoryMatch> {
        let normalized = query.trim().to_lowercase();

        if normalized.is_empty() {
            return vec![];
        }

        CATEGORY_TABLE
            .iter()
            .filter_map(|(label, keywords)| {
                keywords
                    .iter()
                    .find(|keyword| normalized.contains(*keyword))
                    .map(|keyword| CategoryMatch {
                        label: (*label).to_string(),
                        matched_keyword: (*keyword).to_string(),
                    })
            })
            .collect()
    }

    /// Extract categories and return just the labels
    pub fn extract_labels(&self, query: &str) -> Vec<String> {
        self.extract(query).into_iter().map(|m| m.label).collect()
    }
}
