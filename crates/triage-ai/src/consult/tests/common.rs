use std::collections::BTreeSet;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::consult::{
    consultation_router, ConsultationService, DiagnosisConfig, PatientProfile,
    SymptomObservation,
};
use crate::knowledge::{
    Disease, DiseaseCategory, DiseaseId, DiseaseSeverity, DurationRange, KnowledgeStore,
    SeverityLevel, Symptom, SymptomCategory, SymptomId, Urgency,
};

pub(super) fn symptom(id: &str, category: SymptomCategory) -> Symptom {
    Symptom::new(id, id, category, "fixture symptom", 1.0, &[])
}

pub(super) fn ids(values: &[&str]) -> BTreeSet<SymptomId> {
    values.iter().map(|v| SymptomId::from(*v)).collect()
}

pub(super) fn disease(
    id: &str,
    required: &[&str],
    common: &[&str],
    optional: &[&str],
    excluding: &[&str],
) -> Disease {
    Disease {
        id: DiseaseId::from(id),
        name: id.to_string(),
        description: "fixture disease".to_string(),
        category: DiseaseCategory::Respiratory,
        required: ids(required),
        common: ids(common),
        optional: ids(optional),
        excluding: ids(excluding),
        severity: DiseaseSeverity::Moderate,
        urgency: Urgency::SelfCare,
        typical_duration: DurationRange::new(2, 10),
        contagious: false,
        treatments: vec![],
        warning_signs: vec![],
        prevention: vec![],
    }
}

pub(super) fn obs(id: &str, severity: SeverityLevel, days: u32) -> SymptomObservation {
    SymptomObservation::new(id, severity, days)
}

pub(super) fn profile_of(observations: Vec<SymptomObservation>) -> PatientProfile {
    let mut profile = PatientProfile::new();
    for observation in observations {
        profile.add(observation);
    }
    profile
}

/// Two-disease store with the layout the ranking tests are written against:
/// influenza has both rule sets populated, common-cold leans on common
/// symptoms only.
pub(super) fn flu_cold_store() -> KnowledgeStore {
    let symptoms = vec![
        symptom("fever", SymptomCategory::General),
        symptom("fatigue", SymptomCategory::General),
        symptom("muscle-pain", SymptomCategory::Musculoskeletal),
        symptom("headache", SymptomCategory::Neurological),
        symptom("congestion", SymptomCategory::Respiratory),
        symptom("cough", SymptomCategory::Respiratory),
        symptom("rash", SymptomCategory::Dermatological),
    ];
    let diseases = vec![
        disease(
            "influenza",
            &["fever", "fatigue"],
            &["muscle-pain", "headache"],
            &[],
            &[],
        ),
        disease("common-cold", &[], &["congestion", "cough"], &[], &[]),
    ];
    KnowledgeStore::new(symptoms, diseases).expect("fixture store validates")
}

/// Two otherwise identical diseases, except one is contradicted by "rash".
pub(super) fn conflict_store() -> KnowledgeStore {
    let symptoms = vec![
        symptom("fever", SymptomCategory::General),
        symptom("cough", SymptomCategory::Respiratory),
        symptom("rash", SymptomCategory::Dermatological),
    ];
    let diseases = vec![
        disease("alpha-syndrome", &["fever"], &["cough"], &[], &[]),
        disease("beta-syndrome", &["fever"], &["cough"], &[], &["rash"]),
    ];
    KnowledgeStore::new(symptoms, diseases).expect("fixture store validates")
}

/// The strongly-matching influenza presentation the ranking tests reuse.
pub(super) fn flu_profile() -> PatientProfile {
    profile_of(vec![
        obs("fever", SeverityLevel::Severe, 3),
        obs("fatigue", SeverityLevel::Severe, 3),
        obs("muscle-pain", SeverityLevel::Severe, 3),
        obs("headache", SeverityLevel::Moderate, 3),
    ])
}

pub(super) fn standard_service() -> Arc<ConsultationService> {
    Arc::new(
        ConsultationService::with_standard_catalog(DiagnosisConfig::default())
            .expect("bundled catalog validates"),
    )
}

pub(super) fn standard_router() -> axum::Router {
    consultation_router(standard_service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
