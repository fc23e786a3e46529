//! Conversational Intent Detection using substring heuristics.
//!
//! Fast rule-based detection of whether a search query expresses a
//! multi-part or context-rich shopping need better served by the Compass
//! assistant than a plain keyword search. No ML model required - pure
//! substring and prefix matching on the lowercased query.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ClassifierConfig;
use crate::error::IntentError;

/// Question-indicating prefixes. Matched against the start of the
/// normalized query.
const QUESTION_STARTERS: &[&str] = &[
    "what",
    "where",
    "how",
    "why",
    "which",
    "can you",
    "could you",
    "would you",
    "do you have",
];

/// Helper phrases indicating intent. Plain substring containment, not
/// word-boundary matching.
const HELPER_PHRASES: &[&str] = &[
    "i need",
    "i want",
    "i'm looking for",
    "looking for",
    "help me find",
    "help me",
    "find me",
    "show me",
    "i'm restocking",
    "restocking",
    "curate",
    "assortment",
];

/// Multi-product conjunctions, space-padded to avoid matching inside
/// other words.
const MULTI_PRODUCT_INDICATORS: &[&str] = &[" and ", " with ", " or ", " plus "];

/// Generic category nouns. Two or more distinct matches indicate a
/// multi-category request.
const CATEGORY_NOUNS: &[&str] = &[
    "snack",
    "beverage",
    "drink",
    "soap",
    "bath",
    "candle",
    "decor",
    "gift",
    "amenity",
    "amenities",
    "item",
    "product",
    "goods",
];

/// Contextual settings: places, occasions, use cases.
const CONTEXT_INDICATORS: &[&str] = &[
    "hotel",
    "room",
    "guest",
    "shop",
    "store",
    "boutique",
    "cafe",
    "restaurant",
    "office",
    "event",
    "party",
    "wedding",
    "gift basket",
    "welcome",
    "tray",
];

/// Attribute descriptors: style, origin, quality.
const ATTRIBUTE_DESCRIPTORS: &[&str] = &[
    "premium",
    "luxury",
    "local",
    "artisan",
    "organic",
    "sustainable",
    "eco-friendly",
    "handmade",
    "brooklyn",
    "nyc",
    "new york",
];

/// A single detection heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Query begins with a question word or phrase
    QuestionStarter,
    /// Query contains an intent phrase ("i need", "looking for", etc.)
    HelperPhrase,
    /// Query joins products with a conjunction (and, with, or, plus)
    MultiProduct,
    /// Query mentions two or more generic category nouns
    CategoryRichness,
    /// Query mentions a place or occasion (hotel, wedding, etc.)
    ContextSetting,
    /// Query mentions a quality or origin descriptor (premium, local, etc.)
    AttributeDescriptor,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Heuristic {
    /// Returns a human-readable label for the heuristic
    pub fn label(&self) -> &'static str {
        match self {
            Heuristic::QuestionStarter => "question_starter",
            Heuristic::HelperPhrase => "helper_phrase",
            Heuristic::MultiProduct => "multi_product",
            Heuristic::CategoryRichness => "category_richness",
            Heuristic::ContextSetting => "context_setting",
            Heuristic::AttributeDescriptor => "attribute_descriptor",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    /// Whether the query should be routed to the assistant
    pub conversational: bool,
    /// Heuristics that fired, in evaluation order
    pub matched_heuristics: Vec<Heuristic>,
    /// Terms that triggered the heuristics
    pub matched_terms: Vec<String>,
    /// Word count of the normalized query
    pub word_count: usize,
}

impl IntentResult {
    fn empty() -> Self {
        Self {
            conversational: false,
            matched_heuristics: vec![],
            matched_terms: vec![],
            word_count: 0,
        }
    }
}

/// Conversational-query classifier using fixed substring heuristics
pub struct IntentClassifier {
    config: ClassifierConfig,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the default thresholds
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    /// Create a classifier with custom thresholds
    pub fn with_config(config: ClassifierConfig) -> Result<Self, IntentError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// First term from `terms` contained in `query`, if any
    fn first_contained<'a>(query: &str, terms: &[&'a str]) -> Option<&'a str> {
        terms.iter().copied().find(|term| query.contains(term))
    }

    /// Classify a raw search query.
    ///
    /// Total over all inputs: empty or whitespace-only queries produce a
    /// non-conversational result with no matches.
    pub fn classify(&self, query: &str) -> IntentResult {
        let normalized = query.trim().to_lowercase();

        if normalized.is_empty() {
            return IntentResult::empty();
        }

        let word_count = normalized.split_whitespace().count();

        // H1: question words at the start
        let question_starter = QUESTION_STARTERS
            .iter()
            .copied()
            .find(|starter| normalized.starts_with(starter));

        // H2: helper phrases anywhere in the query
        let helper_phrase = Self::first_contained(&normalized, HELPER_PHRASES);

        // H3: multi-product conjunctions
        let multi_product = Self::first_contained(&normalized, MULTI_PRODUCT_INDICATORS);

        // H4: distinct generic category nouns
        let category_matches: Vec<&str> = CATEGORY_NOUNS
            .iter()
            .copied()
            .filter(|noun| normalized.contains(noun))
            .collect();
        let category_rich = category_matches.len() >= self.config.min_category_matches as usize;

        // H5: contextual setting
        let context = Self::first_contained(&normalized, CONTEXT_INDICATORS);

        // H6: attribute descriptors
        let attribute = Self::first_contained(&normalized, ATTRIBUTE_DESCRIPTORS);

        let mut matched_heuristics = Vec::new();
        let mut matched_terms = Vec::new();

        if let Some(term) = question_starter {
            matched_heuristics.push(Heuristic::QuestionStarter);
            matched_terms.push(term.to_string());
        }
        if let Some(term) = helper_phrase {
            matched_heuristics.push(Heuristic::HelperPhrase);
            matched_terms.push(term.to_string());
        }
        if let Some(term) = multi_product {
            matched_heuristics.push(Heuristic::MultiProduct);
            matched_terms.push(term.trim().to_string());
        }
        if category_rich {
            matched_heuristics.push(Heuristic::CategoryRichness);
            matched_terms.extend(category_matches.iter().map(|s| s.to_string()));
        }
        if let Some(term) = context {
            matched_heuristics.push(Heuristic::ContextSetting);
            matched_terms.push(term.to_string());
        }
        if let Some(term) = attribute {
            matched_heuristics.push(Heuristic::AttributeDescriptor);
            matched_terms.push(term.to_string());
        }

        // Decision chain, first rule that holds wins:
        // 1. Starts with a question word
        // 2. Contains a helper phrase
        // 3. Long enough AND (context OR attribute OR conjunction)
        // 4. Multiple category nouns
        // 5. Conjunction AND context
        let context_rich = word_count >= self.config.min_context_words as usize
            && (context.is_some() || attribute.is_some() || multi_product.is_some());

        let conversational = question_starter.is_some()
            || helper_phrase.is_some()
            || context_rich
            || category_rich
            || (multi_product.is_some() && context.is_some());

        IntentResult {
            conversational,
            matched_heuristics,
            matched_terms,
            word_count,
        }
    }

    /// Whether a query should be routed to the assistant panel
    pub fn is_conversational(&self, query: &str) -> bool {
        self.classify(query).conversational
    }
}
