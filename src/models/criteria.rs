use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Criteria value meaning "apply no constraint for this dimension".
pub const NO_PREFERENCE: &str = "no preference";

/// Payment method meaning "no insurance constraint".
pub const SELF_PAY: &str = "self pay";

/// The validated match request, as produced by the intake form.
///
/// Schema validation (field presence, types, enum membership) happens
/// upstream; the engine still treats any missing optional field as
/// "no preference" rather than trusting the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchCriteria {
    /// Patient's state of residence. Providers must be licensed there.
    #[serde(default)]
    pub state: Option<String>,
    /// Insurance name, or the self-pay sentinel.
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub language: Option<String>,

    /// Areas-of-concern checkboxes, keyed by display category name.
    #[serde(default)]
    pub concerns: HashMap<String, bool>,
    /// Therapy-interest checkboxes, keyed by display category name.
    #[serde(rename = "therapyInterests", default)]
    pub therapy_interests: HashMap<String, bool>,
}

/// Closed set of optional preference dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceField {
    Religion,
    Ethnicity,
    Gender,
    Language,
}

impl MatchCriteria {
    /// The effective value of a preference dimension.
    ///
    /// Missing, empty and sentinel values all mean "skip this dimension".
    pub fn preference(&self, field: PreferenceField) -> Option<&str> {
        let raw = match field {
            PreferenceField::Religion => self.religion.as_deref(),
            PreferenceField::Ethnicity => self.ethnicity.as_deref(),
            PreferenceField::Gender => self.gender.as_deref(),
            PreferenceField::Language => self.language.as_deref(),
        };

        raw.map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(NO_PREFERENCE))
    }

    /// The effective state constraint, if any.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// The effective insurance constraint. Self-pay patients have none.
    pub fn insurance(&self) -> Option<&str> {
        self.payment_method
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(SELF_PAY))
    }
}
