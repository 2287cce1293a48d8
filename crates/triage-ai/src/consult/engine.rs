//! Forward chaining: score every disease in the store against one profile
//! and return a ranked, normalized diagnosis list.

use serde::{Deserialize, Serialize};

use crate::knowledge::{DiseaseId, KnowledgeStore, SymptomId, Urgency};

use super::analysis;
use super::profile::PatientProfile;
use super::scoring::{score_disease, ScoreBreakdown};
use super::ConsultError;

/// Tuning knobs for a diagnosis pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    /// Keep only the best N results; `None` returns one result per disease.
    pub max_results: Option<usize>,
}

/// Derived urgency classification for one ranked result. Combines the
/// normalized confidence band with the disease's own urgency; the worse of
/// the two dominates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    fn from_urgency(urgency: Urgency) -> Self {
        match urgency {
            Urgency::SelfCare => RiskLevel::Low,
            Urgency::ScheduleVisit => RiskLevel::Moderate,
            Urgency::SeeSoon => RiskLevel::High,
            Urgency::Emergency => RiskLevel::Critical,
        }
    }

    pub(crate) fn derive(confidence: f64, urgency: Urgency) -> Self {
        Self::from_confidence(confidence).max(Self::from_urgency(urgency))
    }
}

/// One ranked candidate produced by [`diagnose`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub disease_id: DiseaseId,
    pub disease_name: String,
    pub urgency: Urgency,
    pub raw_confidence: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub matched_symptoms: Vec<SymptomId>,
    pub missing_key_symptoms: Vec<SymptomId>,
    pub suggested_tests: Vec<String>,
}

/// Score every disease against the profile and rank the outcome.
///
/// An empty profile is a defined edge case and yields an empty list. Every
/// observation must reference a cataloged symptom; an unknown id is a
/// data-integrity failure surfaced as [`ConsultError::UnknownSymptom`].
pub fn diagnose(
    store: &KnowledgeStore,
    config: &DiagnosisConfig,
    profile: &PatientProfile,
) -> Result<Vec<DiagnosisResult>, ConsultError> {
    for observation in profile.iter() {
        if store.symptom(&observation.symptom_id).is_none() {
            return Err(ConsultError::UnknownSymptom(
                observation.symptom_id.clone(),
            ));
        }
    }
    if profile.is_empty() {
        return Ok(Vec::new());
    }

    let mut scored: Vec<(&crate::knowledge::Disease, ScoreBreakdown)> = store
        .diseases()
        .map(|disease| (disease, score_disease(disease, profile)))
        .collect();

    // Raw confidence descending, disease id ascending on ties.
    scored.sort_by(|(a, sa), (b, sb)| {
        sb.raw_confidence
            .total_cmp(&sa.raw_confidence)
            .then_with(|| a.id.cmp(&b.id))
    });

    let max_raw = scored
        .first()
        .map(|(_, s)| s.raw_confidence)
        .unwrap_or(0.0);

    let mut results: Vec<DiagnosisResult> = scored
        .into_iter()
        .map(|(disease, breakdown)| {
            let confidence = if max_raw > 0.0 {
                breakdown.raw_confidence / max_raw
            } else {
                0.0
            };
            let mut matched_symptoms = breakdown.matched_required.clone();
            matched_symptoms.extend(breakdown.matched_common.iter().cloned());
            matched_symptoms.extend(breakdown.matched_optional.iter().cloned());
            let mut missing_key_symptoms = breakdown.missing_required.clone();
            missing_key_symptoms.extend(breakdown.missing_common.iter().cloned());
            let explanation = explain(store, disease, &breakdown, confidence);
            DiagnosisResult {
                disease_id: disease.id.clone(),
                disease_name: disease.name.clone(),
                urgency: disease.urgency,
                raw_confidence: breakdown.raw_confidence,
                confidence,
                risk_level: RiskLevel::derive(confidence, disease.urgency),
                explanation,
                matched_symptoms,
                missing_key_symptoms,
                suggested_tests: analysis::follow_up_tests(disease.category)
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            }
        })
        .collect();

    if let Some(limit) = config.max_results {
        results.truncate(limit);
    }
    Ok(results)
}

fn explain(
    store: &KnowledgeStore,
    disease: &crate::knowledge::Disease,
    breakdown: &ScoreBreakdown,
    confidence: f64,
) -> String {
    let band = if confidence >= 0.8 {
        "strong match"
    } else if confidence >= 0.5 {
        "partial match"
    } else {
        "weak match"
    };
    let mut text = format!("{} for {}", band, disease.name);

    let matched: Vec<&SymptomId> = breakdown
        .matched_required
        .iter()
        .chain(breakdown.matched_common.iter())
        .collect();
    if !matched.is_empty() {
        text.push_str(": supported by ");
        text.push_str(&name_list(store, &matched));
    }
    if !breakdown.missing_required.is_empty() {
        let ids: Vec<&SymptomId> = breakdown.missing_required.iter().collect();
        text.push_str("; missing required ");
        text.push_str(&name_list(store, &ids));
    }
    if !breakdown.present_excluding.is_empty() {
        let ids: Vec<&SymptomId> = breakdown.present_excluding.iter().collect();
        text.push_str("; contradicted by ");
        text.push_str(&name_list(store, &ids));
    }
    text.push('.');
    text
}

fn name_list(store: &KnowledgeStore, ids: &[&SymptomId]) -> String {
    ids.iter()
        .map(|id| {
            store
                .symptom(id)
                .map(|s| s.name.as_str())
                .unwrap_or(id.as_str())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
