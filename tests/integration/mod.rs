//! Integration tests for webfetch-clean
//!
//! These tests run the complete cleaning pipeline end-to-end on realistic
//! page fixtures and unusual inputs.

mod edge_cases;
mod feature_combinations;
mod real_world_pages;
