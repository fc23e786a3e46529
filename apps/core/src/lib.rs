//! # Compass Core
//!
//! Fast, rule-based search intent engine for the Compass assistant.
//! Decides whether a free-text search query should open the assistant
//! panel or run a plain keyword search, and extracts product-category
//! labels from the query.
//!
//! ## Components
//! - `intent`: conversational-query detection via substring heuristics
//! - `categories`: category extraction over a fixed keyword table
//! - `analysis`: output packet and routing decision
//! - `analyzer`: main orchestrator
//! - `config`: tunable decision thresholds
//!
//! All operations are pure, synchronous, and total over arbitrary string
//! input.

pub mod analysis;
pub mod analyzer;
pub mod categories;
pub mod config;
pub mod error;
pub mod intent;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use analysis::{QueryAnalysis, SearchRoute};
pub use analyzer::SearchAnalyzer;
pub use categories::{CategoryExtractor, CategoryMatch};
pub use config::ClassifierConfig;
pub use error::IntentError;
pub use intent::{Heuristic, IntentClassifier, IntentResult};
