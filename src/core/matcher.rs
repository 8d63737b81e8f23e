use crate::core::{
    categories::{apply_category_filter, CONCERN_CATEGORIES, THERAPY_CATEGORIES},
    filters::passes_critical_filters,
    scoring::apply_preference_chain,
};
use crate::models::{
    MatchCriteria, MatchResult, MatchWeights, ProviderColumn, ProviderRecord, RankingConfig,
};
use crate::services::store::{LoadError, ProviderStore};
use std::sync::Arc;
use tracing::debug;

/// The matching pipeline, stateless per call.
///
/// # Pipeline stages
/// 1. Critical eligibility gate (licensed state, accepted payment)
/// 2. Areas-of-concern category matcher (specializations)
/// 3. Weighted preference chain (religion, ethnicity, gender, language)
/// 4. Therapy-interest category matcher (treatment modalities)
/// 5. Ranking: stable sort by score, score floor, truncation
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: MatchWeights,
    ranking: RankingConfig,
}

impl Matcher {
    pub fn new(weights: MatchWeights, ranking: RankingConfig) -> Self {
        Self { weights, ranking }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchWeights::default(), RankingConfig::default())
    }

    /// Run the pipeline over a working copy of the record set.
    ///
    /// Scores start at zero on every call; the candidates are consumed, so
    /// the canonical store is never touched.
    pub fn find_matches(
        &self,
        criteria: &MatchCriteria,
        candidates: Vec<ProviderRecord>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut working: Vec<ProviderRecord> = candidates
            .into_iter()
            .map(|mut record| {
                record.match_score = 0;
                record
            })
            .filter(|record| passes_critical_filters(record, criteria))
            .collect();
        debug!(total_candidates, eligible = working.len(), "critical filters applied");

        working = apply_category_filter(
            working,
            ProviderColumn::Specializations,
            &CONCERN_CATEGORIES,
            &criteria.concerns,
        );

        working = apply_preference_chain(working, criteria, &self.weights);

        working = apply_category_filter(
            working,
            ProviderColumn::TreatmentModalities,
            &THERAPY_CATEGORIES,
            &criteria.therapy_interests,
        );

        // Stable sort: equal scores keep their dataset order.
        working.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if self.ranking.min_score > 0 {
            working.retain(|record| record.match_score >= self.ranking.min_score);
        }
        working.truncate(self.ranking.max_results);

        debug!(matches = working.len(), "match pipeline finished");

        MatchResult {
            matches: working,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Store-backed matching facade: the one object the rest of the application
/// needs. Constructed explicitly and injected, never a hidden global.
#[derive(Clone)]
pub struct ProviderMatcher {
    store: Arc<ProviderStore>,
    matcher: Matcher,
}

impl ProviderMatcher {
    pub fn new(store: Arc<ProviderStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    /// Load the dataset if it is not loaded yet. Idempotent.
    pub async fn initialize(&self) -> Result<(), LoadError> {
        self.store.initialize().await
    }

    /// Match providers against the given criteria.
    ///
    /// Zero matches is a successful empty result; the only error is a store
    /// that has never managed to load its dataset.
    pub async fn get_matches(&self, criteria: &MatchCriteria) -> Result<MatchResult, LoadError> {
        let candidates = self.store.get_all().await?;
        Ok(self.matcher.find_matches(criteria, candidates))
    }
}
