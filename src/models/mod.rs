// Model exports
pub mod criteria;
pub mod domain;

pub use criteria::{MatchCriteria, PreferenceField, NO_PREFERENCE, SELF_PAY};
pub use domain::{
    MatchResult, MatchWeights, ProviderColumn, ProviderRecord, RankingConfig, LIST_DELIMITER,
};
