//! Therapair Algo - provider matching engine for the Therapair intake platform
//!
//! This library implements the core patient/provider matching algorithm: a
//! multi-stage filter-and-score pipeline over an in-memory set of provider
//! records loaded once from a static dataset.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, ProviderMatcher};
pub use crate::models::{MatchCriteria, MatchResult, MatchWeights, ProviderRecord, RankingConfig};
pub use crate::services::{LoadError, ProviderStore};
