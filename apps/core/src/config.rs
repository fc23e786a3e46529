//! Classifier Configuration.
//!
//! The decision thresholds are unvalidated guesses at user intent with no
//! feedback loop, so they are kept tunable rather than hard-coded.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::IntentError;

/// Default minimum word count before context/attribute/conjunction signals
/// alone make a query conversational.
pub const DEFAULT_MIN_CONTEXT_WORDS: u32 = 3;

/// Default number of distinct category nouns that makes a query conversational
/// on its own.
pub const DEFAULT_MIN_CATEGORY_MATCHES: u32 = 2;

/// Tunable thresholds for the intent classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClassifierConfig {
    /// Minimum word count for the context-rich rule (H3/H5/H6 signals)
    #[validate(range(min = 1))]
    pub min_context_words: u32,
    /// Minimum distinct category-noun matches for the richness rule (H4)
    #[validate(range(min = 1))]
    pub min_category_matches: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_context_words: DEFAULT_MIN_CONTEXT_WORDS,
            min_category_matches: DEFAULT_MIN_CATEGORY_MATCHES,
        }
    }
}

impl ClassifierConfig {
    /// Validate the thresholds, rejecting values that would make the
    /// decision rules vacuous
    pub fn validated(self) -> Result<Self, IntentError> {
        self.validate()?;
        Ok(self)
    }
}
