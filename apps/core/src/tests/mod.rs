//! Test Module
//!
//! Test suite for the Compass search intent engine.
//!
//! ## Test Categories
//! - `intent_tests`: conversational-query heuristics and decision chain
//! - `category_tests`: category extraction and table ordering
//! - `analyzer_tests`: end-to-end routing through the analyzer

pub mod category_tests;
