//! Search Analyzer - main orchestrator.
//!
//! Runs intent classification and category extraction over a query and
//! produces a routing decision for the search UI.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::analysis::{QueryAnalysis, SearchRoute};
use crate::categories::CategoryExtractor;
use crate::config::ClassifierConfig;
use crate::error::IntentError;
use crate::intent::IntentClassifier;

/// Main analyzer combining the intent classifier and category extractor
pub struct SearchAnalyzer {
    intent_classifier: IntentClassifier,
    category_extractor: CategoryExtractor,
}

impl Default for SearchAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAnalyzer {
    /// Create an analyzer with default thresholds
    pub fn new() -> Self {
        Self {
            intent_classifier: IntentClassifier::new(),
            category_extractor: CategoryExtractor::new(),
        }
    }

    /// Create an analyzer with custom classifier thresholds
    pub fn with_config(config: ClassifierConfig) -> Result<Self, IntentError> {
        Ok(Self {
            intent_classifier: IntentClassifier::with_config(config)?,
            category_extractor: CategoryExtractor::new(),
        })
    }

    /// Analyze a query and produce a routing packet
    pub fn analyze(&self, query: &str) -> QueryAnalysis {
        let start = Instant::now();

        let intent = self.intent_classifier.classify(query);
        let categories = self.category_extractor.extract(query);

        let route = if intent.conversational {
            SearchRoute::Assistant
        } else {
            SearchRoute::KeywordSearch
        };

        let analysis = QueryAnalysis {
            query: query.to_string(),
            intent,
            categories,
            route,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        debug!("{}", analysis.summary());

        analysis
    }
}
