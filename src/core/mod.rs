// Core algorithm exports
pub mod categories;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use categories::{apply_category_filter, CategoryMapping, CONCERN_CATEGORIES, THERAPY_CATEGORIES};
pub use filters::{column_contains_text, column_contains_token, passes_critical_filters};
pub use matcher::{Matcher, ProviderMatcher};
pub use scoring::{apply_preference_chain, apply_preference_filter, PreferenceDimension, PREFERENCE_DIMENSIONS};
