//! Display-category tables and the multi-valued category matcher.
//!
//! The intake form shows patients a short list of checkbox categories
//! ("Trauma & PTSD", "Creative & Narrative", ...) instead of the full set of
//! raw values found in the provider columns. Each table below maps one
//! display category to the raw strings that may appear in the corresponding
//! column. A raw dataset value missing from its table simply never matches;
//! the mismatch is not detected at runtime.

use crate::models::{ProviderColumn, ProviderRecord};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A static mapping from display categories to raw column values.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMapping {
    entries: &'static [(&'static str, &'static [&'static str])],
}

/// Areas-of-concern categories, matched against the specializations column.
pub const CONCERN_CATEGORIES: CategoryMapping = CategoryMapping {
    entries: &[
        (
            "ADHD & Autism",
            &[
                "ADHD",
                "Attention Deficit Hyperactivity Disorder (ADD/ADHD)",
                "Autism",
            ],
        ),
        (
            "Anxiety, Panic & Worry",
            &["Anxiety", "Panic attacks", "Social fears", "Worry"],
        ),
        (
            "Behavioral Health",
            &[
                "Anger management",
                "Eating Disorders",
                "Sleep problems",
                "Substance use disorder",
            ],
        ),
        (
            "Cultural & Identity",
            &[
                "Culturally-responsive treatments",
                "Ethnicity and racial identity related issues and/or trauma",
                "LGBTQ+ related concerns",
            ],
        ),
        (
            "Depression & Mood Disorders",
            &["Depression", "Low self-esteem", "Mood disorder"],
        ),
        ("Grief & Loss", &["Grief/bereavement"]),
        (
            "Mental Health Conditions",
            &[
                "Impulse-control difficulties",
                "OCD",
                "Personality disorders",
            ],
        ),
        (
            "Relationships & Social",
            &[
                "Interpersonal problems",
                "Relationship difficulties",
                "Sexual concerns",
            ],
        ),
        (
            "Trauma & PTSD",
            &[
                "Post-Traumatic Stress Disorder (PTSD)",
                "Race-based trauma",
                "Trauma therapy",
                "Trauma-related stress",
            ],
        ),
        (
            "Work & Life Challenges",
            &[
                "Academic stress",
                "Major life transitions",
                "Occupation-related stress",
                "Work-related stress",
            ],
        ),
    ],
};

/// Therapy-interest categories, matched against the treatment modalities
/// column.
pub const THERAPY_CATEGORIES: CategoryMapping = CategoryMapping {
    entries: &[
        (
            "Behavioral & Motivational",
            &[
                "Dialectical Behavioral Therapy (DBT)",
                "MI",
                "Motivational Interviewing",
            ],
        ),
        (
            "Cognitive Behavioral Approaches",
            &[
                "Acceptance and Commitment Therapy (ACT)",
                "Cognitive Behavioral Therapy (CBT)",
                "Mindfulness-Based (MBCT)",
                "Trauma Focused CBT",
            ],
        ),
        ("Creative & Narrative", &["Art Therapy", "Narrative Therapy"]),
        (
            "Psychodynamic & Person-Centered",
            &["Person Centered Therapy", "Psychodynamic therapy"],
        ),
        (
            "Relationship & Family",
            &[
                "Contextual Therapy",
                "Emotionally Focused Therapy",
                "Family Systems Therapy",
                "Relational-Cultural Therapy",
                "Restoration Therapy",
            ],
        ),
        (
            "Trauma & EMDR",
            &["EMDR", "Prolonged Exposure Therapy"],
        ),
    ],
};

impl CategoryMapping {
    /// All display category names in this group.
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Raw values behind one display category.
    pub fn raw_values(&self, category: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(category))
            .map(|(_, raw)| *raw)
    }

    /// Union of raw values across the selected display categories, lowercased
    /// for comparison against column tokens.
    fn expand<'a>(&self, selected: impl Iterator<Item = &'a str>) -> HashSet<String> {
        selected
            .filter_map(|category| self.raw_values(category))
            .flat_map(|raw| raw.iter())
            .map(|value| value.to_ascii_lowercase())
            .collect()
    }
}

/// Keep only records whose multi-value `column` intersects the raw values of
/// the selected categories.
///
/// Selecting no category applies no filter at all. Selecting several is an
/// OR: one overlapping raw value in any selected category is enough. The
/// stage never touches `match_score`.
pub fn apply_category_filter(
    records: Vec<ProviderRecord>,
    column: ProviderColumn,
    mapping: &CategoryMapping,
    flags: &HashMap<String, bool>,
) -> Vec<ProviderRecord> {
    let wanted = mapping.expand(
        flags
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(category, _)| category.as_str()),
    );

    if wanted.is_empty() {
        return records;
    }

    let before = records.len();
    let survivors: Vec<ProviderRecord> = records
        .into_iter()
        .filter(|record| {
            record
                .column_values(column)
                .any(|value| wanted.contains(&value.to_ascii_lowercase()))
        })
        .collect();

    debug!(
        ?column,
        selected = wanted.len(),
        before,
        after = survivors.len(),
        "applied category filter"
    );

    survivors
}
