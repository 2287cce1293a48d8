//! Descriptive pattern analysis over a profile, plus follow-up-test
//! suggestions for a chosen diagnosis. Purely derivative of its inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::knowledge::{DiseaseCategory, KnowledgeStore, SymptomCategory, SymptomId};

use super::engine::DiagnosisResult;
use super::profile::PatientProfile;
use super::ConsultError;

/// Symptoms lasting longer than this are flagged as persistent.
const PERSISTENT_DAYS: u32 = 14;

/// Descriptive statistics over a profile, optionally extended with what a
/// chosen diagnosis still lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSummary {
    pub total_symptoms: usize,
    pub dominant_category: Option<SymptomCategory>,
    pub category_distribution: BTreeMap<SymptomCategory, usize>,
    pub average_severity: f64,
    pub persistent_symptoms: Vec<SymptomId>,
    pub missing_key_symptoms: Vec<SymptomId>,
    pub suggested_tests: Vec<String>,
}

pub fn analyze(
    store: &KnowledgeStore,
    profile: &PatientProfile,
    top_result: Option<&DiagnosisResult>,
) -> Result<PatternSummary, ConsultError> {
    let mut category_distribution: BTreeMap<SymptomCategory, usize> = BTreeMap::new();
    let mut severity_sum = 0.0;
    let mut persistent_symptoms = Vec::new();

    for observation in profile.iter() {
        let symptom = store
            .symptom(&observation.symptom_id)
            .ok_or_else(|| ConsultError::UnknownSymptom(observation.symptom_id.clone()))?;
        *category_distribution.entry(symptom.category).or_insert(0) += 1;
        severity_sum += observation.severity.ordinal() as f64;
        if observation.duration_days > PERSISTENT_DAYS {
            persistent_symptoms.push(observation.symptom_id.clone());
        }
    }

    let total_symptoms = profile.len();
    let average_severity = if total_symptoms == 0 {
        0.0
    } else {
        severity_sum / total_symptoms as f64
    };
    // Largest count wins; category order breaks ties deterministically.
    let dominant_category = category_distribution
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(category, _)| *category);

    let (missing_key_symptoms, suggested_tests) = match top_result {
        Some(result) => {
            let disease = store
                .disease(&result.disease_id)
                .ok_or_else(|| ConsultError::UnknownDisease(result.disease_id.clone()))?;
            let missing: Vec<SymptomId> = disease
                .required
                .iter()
                .chain(disease.common.iter())
                .filter(|id| !profile.has(id))
                .cloned()
                .collect();
            let tests = follow_up_tests(disease.category)
                .iter()
                .map(|t| t.to_string())
                .collect();
            (missing, tests)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(PatternSummary {
        total_symptoms,
        dominant_category,
        category_distribution,
        average_severity,
        persistent_symptoms,
        missing_key_symptoms,
        suggested_tests,
    })
}

/// Fixed lookup of sensible follow-up tests per disease domain.
pub(crate) fn follow_up_tests(category: DiseaseCategory) -> &'static [&'static str] {
    match category {
        DiseaseCategory::Respiratory => &[
            "rapid influenza antigen test",
            "chest X-ray",
            "oxygen saturation check",
        ],
        DiseaseCategory::Gastrointestinal => &[
            "H. pylori breath test",
            "stool culture",
            "basic metabolic panel",
        ],
        DiseaseCategory::Neurological => &[
            "neurological examination",
            "headache diary review",
        ],
        DiseaseCategory::Urinary => &["urinalysis", "urine culture"],
        DiseaseCategory::Ophthalmic => &[
            "slit lamp examination",
            "conjunctival swab culture",
        ],
    }
}
