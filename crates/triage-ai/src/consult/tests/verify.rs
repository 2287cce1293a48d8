use super::common::*;
use crate::consult::verify::{verify, VerificationOutcome};
use crate::consult::ConsultError;
use crate::knowledge::{DiseaseId, SeverityLevel, SymptomId};

#[test]
fn missing_required_symptom_rejects_with_its_name() {
    let store = flu_cold_store();
    // Influenza requires fever and fatigue; fever is absent.
    let profile = profile_of(vec![
        obs("fatigue", SeverityLevel::Moderate, 3),
        obs("headache", SeverityLevel::Moderate, 3),
    ]);
    let report = verify(&store, &DiseaseId::from("influenza"), &profile).expect("verify");

    assert_eq!(report.outcome.label(), "rejected-missing-required");
    assert_eq!(
        report.outcome,
        VerificationOutcome::RejectedMissingRequired {
            missing: vec![SymptomId::from("fever")],
        }
    );
    assert!(report.explanation.contains("fever"));
    assert!(!report.outcome.is_admissible());
}

#[test]
fn present_excluding_symptom_rejects_before_required_is_checked() {
    let store = conflict_store();
    // beta-syndrome requires fever (absent) and excludes rash (present);
    // the exclusion check must win.
    let profile = profile_of(vec![obs("rash", SeverityLevel::Mild, 2)]);
    let report = verify(&store, &DiseaseId::from("beta-syndrome"), &profile).expect("verify");

    assert_eq!(report.outcome.label(), "rejected-excluding-present");
    assert_eq!(
        report.outcome,
        VerificationOutcome::RejectedExcludingPresent {
            present: vec![SymptomId::from("rash")],
        }
    );
    assert!(report.explanation.contains("rash"));
}

#[test]
fn satisfied_hypothesis_is_accepted_with_support_ratio() {
    let store = flu_cold_store();
    let profile = profile_of(vec![
        obs("fever", SeverityLevel::Severe, 3),
        obs("fatigue", SeverityLevel::Severe, 3),
        obs("headache", SeverityLevel::Moderate, 3),
    ]);
    let report = verify(&store, &DiseaseId::from("influenza"), &profile).expect("verify");

    assert_eq!(report.outcome.label(), "accepted-with-support-ratio");
    assert_eq!(
        report.outcome,
        VerificationOutcome::Accepted { support_ratio: 0.5 }
    );
    assert!(report.outcome.is_admissible());
    assert!(report.explanation.contains("0.50"));
}

#[test]
fn empty_common_set_accepts_with_zero_support() {
    let symptoms = vec![symptom("fever", crate::knowledge::SymptomCategory::General)];
    let diseases = vec![disease("bare-syndrome", &["fever"], &[], &[], &[])];
    let store = crate::knowledge::KnowledgeStore::new(symptoms, diseases).expect("store");
    let profile = profile_of(vec![obs("fever", SeverityLevel::Moderate, 2)]);

    let report = verify(&store, &DiseaseId::from("bare-syndrome"), &profile).expect("verify");
    assert_eq!(
        report.outcome,
        VerificationOutcome::Accepted { support_ratio: 0.0 }
    );
}

#[test]
fn unknown_disease_id_is_an_error() {
    let store = flu_cold_store();
    let error = verify(&store, &DiseaseId::from("ghost"), &flu_profile()).unwrap_err();
    assert_eq!(error, ConsultError::UnknownDisease(DiseaseId::from("ghost")));
}

#[test]
fn unknown_symptom_in_profile_is_an_error() {
    let store = flu_cold_store();
    let profile = profile_of(vec![obs("not-a-symptom", SeverityLevel::Mild, 1)]);
    let error = verify(&store, &DiseaseId::from("influenza"), &profile).unwrap_err();
    assert_eq!(
        error,
        ConsultError::UnknownSymptom(SymptomId::from("not-a-symptom"))
    );
}
