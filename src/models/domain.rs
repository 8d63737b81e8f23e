use serde::{Deserialize, Serialize};

/// Delimiter used by the multi-value provider columns
/// (e.g. `"FL, CA, TX"` or `"English,Vietnamese"`).
pub const LIST_DELIMITER: char = ',';

/// A single provider row from the static dataset.
///
/// Multi-value columns (languages, licensed states, accepted insurances,
/// specializations, treatment modalities) are stored as comma-delimited
/// strings, exactly as they appear in the source data. `match_score` is
/// recomputed per request on a working copy and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "ethnicIdentity")]
    pub ethnic_identity: String,
    #[serde(rename = "genderIdentity")]
    pub gender_identity: String,
    #[serde(rename = "religiousBackground")]
    pub religious_background: String,
    #[serde(rename = "availableSlots", default)]
    pub available_slots: u32,
    #[serde(default)]
    pub languages: String,
    #[serde(rename = "statesLicensed")]
    pub states_licensed: String,
    #[serde(rename = "insuranceAccepted")]
    pub insurance_accepted: String,
    #[serde(default)]
    pub specializations: String,
    #[serde(rename = "treatmentModalities", default)]
    pub treatment_modalities: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "matchScore", default)]
    pub match_score: i32,
}

/// Closed set of filterable provider columns.
///
/// The engine never looks columns up by string key; every stage names its
/// column through this enum, so a typo'd column is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderColumn {
    EthnicIdentity,
    GenderIdentity,
    ReligiousBackground,
    Languages,
    StatesLicensed,
    InsuranceAccepted,
    Specializations,
    TreatmentModalities,
}

impl ProviderRecord {
    /// Field-accessor table for the filterable columns.
    pub fn column(&self, column: ProviderColumn) -> &str {
        match column {
            ProviderColumn::EthnicIdentity => &self.ethnic_identity,
            ProviderColumn::GenderIdentity => &self.gender_identity,
            ProviderColumn::ReligiousBackground => &self.religious_background,
            ProviderColumn::Languages => &self.languages,
            ProviderColumn::StatesLicensed => &self.states_licensed,
            ProviderColumn::InsuranceAccepted => &self.insurance_accepted,
            ProviderColumn::Specializations => &self.specializations,
            ProviderColumn::TreatmentModalities => &self.treatment_modalities,
        }
    }

    /// Iterate the trimmed values of a multi-value column.
    pub fn column_values(&self, column: ProviderColumn) -> impl Iterator<Item = &str> + '_ {
        self.column(column)
            .split(LIST_DELIMITER)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Per-dimension weights for the optional preference filters.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub religion: i32,
    pub ethnicity: i32,
    pub gender: i32,
    pub language: i32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            religion: 3,
            ethnicity: 3,
            gender: 3,
            language: 3,
        }
    }
}

/// Ranking configuration: score floor and result cap.
#[derive(Debug, Clone, Copy)]
pub struct RankingConfig {
    /// Records scoring below this are dropped. 0 disables the floor.
    pub min_score: i32,
    /// Maximum number of records returned.
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_results: 20,
        }
    }
}

/// Result of the matching pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub matches: Vec<ProviderRecord>,
    pub total_candidates: usize,
}
