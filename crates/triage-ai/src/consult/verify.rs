//! Backward chaining: is one specific disease hypothesis admissible for the
//! reported symptoms? Independent of the ranked forward pass; exclusion is a
//! hard rejection here rather than the forward pass's soft penalty.

use serde::{Deserialize, Serialize};

use crate::knowledge::{Disease, DiseaseId, KnowledgeStore, SymptomId};

use super::profile::PatientProfile;
use super::ConsultError;

/// Terminal outcome of a verification pass, checked in order: excluding
/// symptoms first, required symptoms second, support ratio last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationOutcome {
    RejectedExcludingPresent { present: Vec<SymptomId> },
    RejectedMissingRequired { missing: Vec<SymptomId> },
    Accepted { support_ratio: f64 },
}

impl VerificationOutcome {
    pub const fn label(&self) -> &'static str {
        match self {
            VerificationOutcome::RejectedExcludingPresent { .. } => "rejected-excluding-present",
            VerificationOutcome::RejectedMissingRequired { .. } => "rejected-missing-required",
            VerificationOutcome::Accepted { .. } => "accepted-with-support-ratio",
        }
    }

    pub const fn is_admissible(&self) -> bool {
        matches!(self, VerificationOutcome::Accepted { .. })
    }
}

/// Outcome plus the prose a clinician-facing caller can surface directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub disease_id: DiseaseId,
    pub outcome: VerificationOutcome,
    pub explanation: String,
}

pub fn verify(
    store: &KnowledgeStore,
    disease_id: &DiseaseId,
    profile: &PatientProfile,
) -> Result<VerificationReport, ConsultError> {
    let disease = store
        .disease(disease_id)
        .ok_or_else(|| ConsultError::UnknownDisease(disease_id.clone()))?;
    for observation in profile.iter() {
        if store.symptom(&observation.symptom_id).is_none() {
            return Err(ConsultError::UnknownSymptom(
                observation.symptom_id.clone(),
            ));
        }
    }

    let present_excluding: Vec<SymptomId> = disease
        .excluding
        .iter()
        .filter(|id| profile.has(id))
        .cloned()
        .collect();
    if !present_excluding.is_empty() {
        let explanation = format!(
            "{} is ruled out: contradicting symptom(s) present: {}.",
            disease.name,
            name_list(store, &present_excluding)
        );
        return Ok(VerificationReport {
            disease_id: disease.id.clone(),
            outcome: VerificationOutcome::RejectedExcludingPresent {
                present: present_excluding,
            },
            explanation,
        });
    }

    let missing_required: Vec<SymptomId> = disease
        .required
        .iter()
        .filter(|id| !profile.has(id))
        .cloned()
        .collect();
    if !missing_required.is_empty() {
        let explanation = format!(
            "{} is not supported: required symptom(s) missing: {}.",
            disease.name,
            name_list(store, &missing_required)
        );
        return Ok(VerificationReport {
            disease_id: disease.id.clone(),
            outcome: VerificationOutcome::RejectedMissingRequired {
                missing: missing_required,
            },
            explanation,
        });
    }

    let matched_common = disease
        .common
        .iter()
        .filter(|id| profile.has(id))
        .count();
    let support_ratio = if disease.common.is_empty() {
        0.0
    } else {
        matched_common as f64 / disease.common.len() as f64
    };
    let explanation = accepted_explanation(store, disease, matched_common, support_ratio);
    Ok(VerificationReport {
        disease_id: disease.id.clone(),
        outcome: VerificationOutcome::Accepted { support_ratio },
        explanation,
    })
}

fn accepted_explanation(
    store: &KnowledgeStore,
    disease: &Disease,
    matched_common: usize,
    support_ratio: f64,
) -> String {
    let mut text = format!("{} is admissible", disease.name);
    if !disease.required.is_empty() {
        let required: Vec<SymptomId> = disease.required.iter().cloned().collect();
        text.push_str(": all required symptoms present (");
        text.push_str(&name_list(store, &required));
        text.push(')');
    }
    text.push_str(&format!(
        "; {matched_common} of {} common symptom(s) reported (support ratio {support_ratio:.2}).",
        disease.common.len()
    ));
    text
}

fn name_list(store: &KnowledgeStore, ids: &[SymptomId]) -> String {
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
