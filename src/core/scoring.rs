use crate::core::filters::column_contains_text;
use crate::models::{MatchCriteria, MatchWeights, PreferenceField, ProviderColumn, ProviderRecord};
use tracing::debug;

/// One optional, weighted preference dimension: which provider column it
/// reads and which criteria field drives it.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceDimension {
    pub column: ProviderColumn,
    pub field: PreferenceField,
}

/// The ordered preference chain. All per-field logic lives in the data,
/// not in duplicated filter functions.
pub const PREFERENCE_DIMENSIONS: [PreferenceDimension; 4] = [
    PreferenceDimension {
        column: ProviderColumn::ReligiousBackground,
        field: PreferenceField::Religion,
    },
    PreferenceDimension {
        column: ProviderColumn::EthnicIdentity,
        field: PreferenceField::Ethnicity,
    },
    PreferenceDimension {
        column: ProviderColumn::GenderIdentity,
        field: PreferenceField::Gender,
    },
    PreferenceDimension {
        column: ProviderColumn::Languages,
        field: PreferenceField::Language,
    },
];

impl MatchWeights {
    /// Weight applied when the given dimension matches.
    pub fn weight_for(&self, field: PreferenceField) -> i32 {
        match field {
            PreferenceField::Religion => self.religion,
            PreferenceField::Ethnicity => self.ethnicity,
            PreferenceField::Gender => self.gender,
            PreferenceField::Language => self.language,
        }
    }
}

/// Apply one weighted optional filter to the working set.
///
/// A skipped dimension (missing / empty / "no preference") passes the set
/// through untouched. Otherwise only records whose column contains the
/// requested value survive, and each survivor's score grows by `weight`.
/// Dimensions therefore intersect: asking for both a religion and a
/// language keeps only providers matching both.
pub fn apply_preference_filter(
    records: Vec<ProviderRecord>,
    criteria: &MatchCriteria,
    dimension: PreferenceDimension,
    weight: i32,
) -> Vec<ProviderRecord> {
    let Some(wanted) = criteria.preference(dimension.field) else {
        return records;
    };

    let before = records.len();
    let survivors: Vec<ProviderRecord> = records
        .into_iter()
        .filter_map(|mut record| {
            if column_contains_text(&record, dimension.column, wanted) {
                record.match_score += weight;
                Some(record)
            } else {
                None
            }
        })
        .collect();

    debug!(
        dimension = ?dimension.field,
        wanted,
        before,
        after = survivors.len(),
        "applied preference filter"
    );

    survivors
}

/// Run the whole preference chain in its configured order.
pub fn apply_preference_chain(
    records: Vec<ProviderRecord>,
    criteria: &MatchCriteria,
    weights: &MatchWeights,
) -> Vec<ProviderRecord> {
    PREFERENCE_DIMENSIONS
        .into_iter()
        .fold(records, |working, dimension| {
            apply_preference_filter(working, criteria, dimension, weights.weight_for(dimension.field))
        })
}
