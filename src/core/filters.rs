use crate::models::{MatchCriteria, ProviderColumn, ProviderRecord};

/// Check whether a delimited column contains `value` as a trimmed token,
/// ignoring case. Used for the critical list columns (licensed states,
/// accepted insurances), where a substring match on "CA" against
/// "Molina Healthcare" style entries would be too loose.
#[inline]
pub fn column_contains_token(record: &ProviderRecord, column: ProviderColumn, value: &str) -> bool {
    record
        .column_values(column)
        .any(|v| v.eq_ignore_ascii_case(value))
}

/// Check whether a column contains `value` as a case-insensitive substring.
/// Used by the soft preference dimensions, which match free-ish text.
#[inline]
pub fn column_contains_text(record: &ProviderRecord, column: ProviderColumn, value: &str) -> bool {
    record
        .column(column)
        .to_ascii_lowercase()
        .contains(&value.to_ascii_lowercase())
}

/// The non-negotiable eligibility gate.
///
/// - State given: the provider must be licensed in the patient's state.
/// - Payment method given and not self-pay: the provider must accept it.
///
/// An absent criterion skips its check entirely (unconstrained, never
/// "exclude all"). This stage only filters; it contributes no score.
#[inline]
pub fn passes_critical_filters(record: &ProviderRecord, criteria: &MatchCriteria) -> bool {
    if let Some(state) = criteria.state() {
        if !column_contains_token(record, ProviderColumn::StatesLicensed, state) {
            return false;
        }
    }

    if let Some(insurance) = criteria.insurance() {
        if !column_contains_token(record, ProviderColumn::InsuranceAccepted, insurance) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(states: &str, insurance: &str) -> ProviderRecord {
        ProviderRecord {
            first_name: "Test".to_string(),
            last_name: "Provider".to_string(),
            ethnic_identity: "Vietnamese".to_string(),
            gender_identity: "Female".to_string(),
            religious_background: "Christian".to_string(),
            available_slots: 5,
            languages: "English, Vietnamese".to_string(),
            states_licensed: states.to_string(),
            insurance_accepted: insurance.to_string(),
            specializations: "Depression, Anxiety".to_string(),
            treatment_modalities: "Cognitive Behavioral Therapy (CBT)".to_string(),
            bio: String::new(),
            match_score: 0,
        }
    }

    fn criteria(state: Option<&str>, payment: Option<&str>) -> MatchCriteria {
        MatchCriteria {
            state: state.map(str::to_string),
            payment_method: payment.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_state_gate_pass() {
        let record = test_record("FL, CA, TX", "Aetna, Self Pay");
        assert!(passes_critical_filters(&record, &criteria(Some("TX"), None)));
    }

    #[test]
    fn test_state_gate_fail() {
        let record = test_record("FL, CA", "Aetna");
        assert!(!passes_critical_filters(&record, &criteria(Some("TX"), None)));
    }

    #[test]
    fn test_state_token_not_substring() {
        // "CA" must not match a licensed state list that only has "NC".
        let record = test_record("NC", "Aetna");
        assert!(!passes_critical_filters(&record, &criteria(Some("CA"), None)));
    }

    #[test]
    fn test_insurance_gate() {
        let record = test_record("NY", "Empire BlueCross, Oxford Health Plans");
        assert!(passes_critical_filters(
            &record,
            &criteria(Some("NY"), Some("Empire BlueCross"))
        ));
        assert!(!passes_critical_filters(
            &record,
            &criteria(Some("NY"), Some("Cigna"))
        ));
    }

    #[test]
    fn test_self_pay_skips_insurance_gate() {
        let record = test_record("NY", "Cigna");
        assert!(passes_critical_filters(
            &record,
            &criteria(Some("NY"), Some("Self Pay"))
        ));
    }

    #[test]
    fn test_absent_criteria_is_unconstrained() {
        let record = test_record("NY", "Cigna");
        assert!(passes_critical_filters(&record, &criteria(None, None)));
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let record = test_record("NY", "Cigna");
        assert!(column_contains_text(
            &record,
            ProviderColumn::ReligiousBackground,
            "christian"
        ));
    }
}
