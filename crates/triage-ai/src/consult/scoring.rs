//! Pure scoring of one disease against one patient profile.
//!
//! Weighted rule-set coverage plus two bounded multipliers. Everything here
//! is a total function: empty rule sets never divide by zero and the output
//! is deterministic for identical inputs.

use crate::knowledge::{Disease, SymptomId};

use super::profile::PatientProfile;

pub(crate) const REQUIRED_WEIGHT: f64 = 0.40;
pub(crate) const COMMON_WEIGHT: f64 = 0.35;
pub(crate) const OPTIONAL_WEIGHT: f64 = 0.15;
pub(crate) const EXCLUDING_WEIGHT: f64 = 0.10;

const SEVERITY_STEP: f64 = 0.15;
const SEVERITY_FLOOR: f64 = 0.7;
const SEVERITY_CEILING: f64 = 1.3;

const DURATION_IN_RANGE: f64 = 1.1;
const DURATION_STEP: f64 = 0.03;
const DURATION_FLOOR: f64 = 0.8;
const DURATION_CEILING: f64 = 1.15;

/// Full decomposition of one disease's score. The engine keeps the matched
/// and missing id lists for explanation text; the verifier reuses the same
/// set walks through [`score_disease`]'s helpers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreBreakdown {
    pub required_score: f64,
    pub common_score: f64,
    pub optional_score: f64,
    pub excluding_penalty: f64,
    pub severity_multiplier: f64,
    pub duration_multiplier: f64,
    pub raw_confidence: f64,
    pub matched_required: Vec<SymptomId>,
    pub matched_common: Vec<SymptomId>,
    pub matched_optional: Vec<SymptomId>,
    pub present_excluding: Vec<SymptomId>,
    pub missing_required: Vec<SymptomId>,
    pub missing_common: Vec<SymptomId>,
}

pub(crate) fn score_disease(disease: &Disease, profile: &PatientProfile) -> ScoreBreakdown {
    let (matched_required, missing_required) = split_matches(&disease.required, profile);
    let (matched_common, missing_common) = split_matches(&disease.common, profile);
    let (matched_optional, _) = split_matches(&disease.optional, profile);
    let (present_excluding, _) = split_matches(&disease.excluding, profile);

    let required_score = if disease.required.is_empty() {
        1.0
    } else {
        matched_required.len() as f64 / disease.required.len() as f64
    };
    let common_score = ratio(matched_common.len(), disease.common.len());
    let optional_score = ratio(matched_optional.len(), disease.optional.len());
    let excluding_penalty =
        present_excluding.len() as f64 / disease.excluding.len().max(1) as f64;

    let base = (REQUIRED_WEIGHT * required_score
        + COMMON_WEIGHT * common_score
        + OPTIONAL_WEIGHT * optional_score
        - EXCLUDING_WEIGHT * excluding_penalty)
        .max(0.0);

    let key_matches: Vec<&SymptomId> =
        matched_required.iter().chain(matched_common.iter()).collect();
    let severity_multiplier = severity_multiplier(disease, profile, &key_matches);
    let duration_multiplier = duration_multiplier(disease, profile, &key_matches);

    ScoreBreakdown {
        required_score,
        common_score,
        optional_score,
        excluding_penalty,
        severity_multiplier,
        duration_multiplier,
        raw_confidence: base * severity_multiplier * duration_multiplier,
        matched_required,
        matched_common,
        matched_optional,
        present_excluding,
        missing_required,
        missing_common,
    }
}

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// Walk a rule set in id order, partitioning into present and absent ids.
fn split_matches(
    rule_set: &std::collections::BTreeSet<SymptomId>,
    profile: &PatientProfile,
) -> (Vec<SymptomId>, Vec<SymptomId>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for id in rule_set {
        if profile.has(id) {
            matched.push(id.clone());
        } else {
            missing.push(id.clone());
        }
    }
    (matched, missing)
}

/// Scales the base up when matched symptoms run more severe than the disease
/// typically presents, down when milder. 1.0 when nothing key matched.
fn severity_multiplier(
    disease: &Disease,
    profile: &PatientProfile,
    key_matches: &[&SymptomId],
) -> f64 {
    if key_matches.is_empty() {
        return 1.0;
    }
    let sum: f64 = key_matches
        .iter()
        .filter_map(|id| profile.severity(id))
        .map(|level| level.ordinal() as f64)
        .sum();
    let average = sum / key_matches.len() as f64;
    let expected = disease.severity.expected_level().ordinal() as f64;
    (1.0 + SEVERITY_STEP * (average - expected)).clamp(SEVERITY_FLOOR, SEVERITY_CEILING)
}

/// Rewards mean matched duration inside the disease's typical range and
/// penalizes per day outside it. 1.0 when nothing key matched.
fn duration_multiplier(
    disease: &Disease,
    profile: &PatientProfile,
    key_matches: &[&SymptomId],
) -> f64 {
    if key_matches.is_empty() {
        return 1.0;
    }
    let sum: f64 = key_matches
        .iter()
        .filter_map(|id| profile.duration(id))
        .map(|days| days as f64)
        .sum();
    let mean_days = sum / key_matches.len() as f64;
    if disease.typical_duration.contains(mean_days) {
        DURATION_IN_RANGE
    } else {
        let outside = disease.typical_duration.distance(mean_days);
        (1.05 - DURATION_STEP * outside).clamp(DURATION_FLOOR, DURATION_CEILING)
    }
}
