//! Query Analysis packet - output structure for search analysis.
//!
//! Bundles the intent verdict, detected categories, and the suggested
//! search route for the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categories::CategoryMatch;
use crate::intent::IntentResult;

/// Where the query should be routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchRoute {
    /// Open the Compass assistant panel with the query
    Assistant,
    /// Run a plain keyword search
    KeywordSearch,
}

/// Complete analysis of a search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Original user query
    pub query: String,

    /// Intent verdict with matched heuristics
    pub intent: IntentResult,

    /// Detected categories, in table order
    pub categories: Vec<CategoryMatch>,

    /// Suggested route for the query
    pub route: SearchRoute,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl QueryAnalysis {
    /// Whether the assistant route was suggested
    pub fn is_conversational(&self) -> bool {
        self.route == SearchRoute::Assistant
    }

    /// Detected category labels, in table order
    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|m| m.label.as_str()).collect()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Route: {:?}, Heuristics: {}, Categories: {}, Words: {}",
            self.route,
            self.intent.matched_heuristics.len(),
            self.categories.len(),
            self.intent.word_count,
        )
    }
}
