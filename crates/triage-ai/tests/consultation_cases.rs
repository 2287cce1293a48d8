//! End-to-end clinical validation: replay bundled presentations against the
//! standard catalog and check the expected condition ranks where it should.

use triage_ai::consult::{ConsultationService, DiagnosisConfig, PatientProfile, SymptomObservation};
use triage_ai::knowledge::{DiseaseId, SeverityLevel};

struct ClinicalCase {
    name: &'static str,
    observations: &'static [(&'static str, SeverityLevel, u32)],
    expected: &'static str,
    within_top: usize,
}

const CASES: &[ClinicalCase] = &[
    ClinicalCase {
        name: "classic influenza",
        observations: &[
            ("fever", SeverityLevel::Severe, 3),
            ("muscle-pain", SeverityLevel::Severe, 3),
            ("fatigue", SeverityLevel::Severe, 3),
            ("headache", SeverityLevel::Moderate, 3),
            ("dry-cough", SeverityLevel::Moderate, 3),
            ("chills", SeverityLevel::Moderate, 3),
        ],
        expected: "influenza",
        within_top: 1,
    },
    ClinicalCase {
        name: "common cold",
        observations: &[
            ("nasal-congestion", SeverityLevel::Moderate, 2),
            ("sneezing", SeverityLevel::Moderate, 2),
            ("sore-throat", SeverityLevel::Mild, 2),
            ("dry-cough", SeverityLevel::Mild, 2),
        ],
        expected: "common-cold",
        within_top: 1,
    },
    ClinicalCase {
        name: "acute gastritis",
        observations: &[
            ("abdominal-pain", SeverityLevel::Moderate, 4),
            ("heartburn", SeverityLevel::Severe, 4),
            ("nausea", SeverityLevel::Moderate, 4),
            ("appetite-loss", SeverityLevel::Moderate, 4),
        ],
        expected: "gastritis",
        within_top: 1,
    },
    ClinicalCase {
        name: "viral gastroenteritis",
        observations: &[
            ("diarrhea", SeverityLevel::Severe, 2),
            ("vomiting", SeverityLevel::Moderate, 2),
            ("nausea", SeverityLevel::Severe, 2),
            ("abdominal-pain", SeverityLevel::Moderate, 2),
            ("fever", SeverityLevel::Mild, 2),
        ],
        expected: "gastroenteritis",
        within_top: 1,
    },
    ClinicalCase {
        name: "acute bronchitis",
        observations: &[
            ("productive-cough", SeverityLevel::Severe, 10),
            ("chest-pain", SeverityLevel::Moderate, 10),
            ("fatigue", SeverityLevel::Moderate, 10),
            ("shortness-of-breath", SeverityLevel::Moderate, 10),
        ],
        expected: "bronchitis",
        within_top: 1,
    },
    ClinicalCase {
        name: "acute pharyngitis",
        observations: &[
            ("sore-throat", SeverityLevel::Severe, 3),
            ("swallowing-pain", SeverityLevel::Severe, 3),
            ("fever", SeverityLevel::Moderate, 3),
            ("headache", SeverityLevel::Mild, 3),
        ],
        expected: "pharyngitis",
        within_top: 1,
    },
    ClinicalCase {
        name: "acute sinusitis",
        observations: &[
            ("nasal-congestion", SeverityLevel::Severe, 10),
            ("headache", SeverityLevel::Moderate, 10),
            ("facial-pain", SeverityLevel::Severe, 10),
            ("facial-pressure", SeverityLevel::Moderate, 10),
        ],
        expected: "sinusitis",
        within_top: 1,
    },
    ClinicalCase {
        name: "migraine attack",
        observations: &[
            ("headache", SeverityLevel::Critical, 1),
            ("nausea", SeverityLevel::Moderate, 1),
            ("light-sensitivity", SeverityLevel::Severe, 1),
            ("sound-sensitivity", SeverityLevel::Moderate, 1),
        ],
        expected: "migraine",
        within_top: 1,
    },
    ClinicalCase {
        name: "lower urinary tract infection",
        observations: &[
            ("painful-urination", SeverityLevel::Severe, 3),
            ("urinary-frequency", SeverityLevel::Severe, 3),
            ("urinary-urgency", SeverityLevel::Moderate, 3),
            ("cloudy-urine", SeverityLevel::Moderate, 3),
        ],
        expected: "urinary-tract-infection",
        within_top: 1,
    },
    ClinicalCase {
        name: "conjunctivitis",
        observations: &[
            ("red-eyes", SeverityLevel::Moderate, 6),
            ("eye-itching", SeverityLevel::Moderate, 6),
            ("tearing", SeverityLevel::Mild, 6),
            ("eye-discharge", SeverityLevel::Moderate, 6),
        ],
        expected: "conjunctivitis",
        within_top: 1,
    },
    ClinicalCase {
        name: "mixed respiratory picture",
        observations: &[
            ("fever", SeverityLevel::Moderate, 8),
            ("productive-cough", SeverityLevel::Severe, 8),
            ("fatigue", SeverityLevel::Moderate, 8),
            ("chest-pain", SeverityLevel::Mild, 8),
        ],
        expected: "bronchitis",
        within_top: 1,
    },
    ClinicalCase {
        name: "early nonspecific viral prodrome",
        observations: &[
            ("fever", SeverityLevel::Mild, 1),
            ("headache", SeverityLevel::Mild, 1),
            ("fatigue", SeverityLevel::Mild, 1),
        ],
        expected: "influenza",
        within_top: 3,
    },
];

fn service() -> ConsultationService {
    ConsultationService::with_standard_catalog(DiagnosisConfig::default())
        .expect("bundled catalog validates")
}

fn profile_for(case: &ClinicalCase) -> PatientProfile {
    let mut profile = PatientProfile::new();
    for (id, severity, days) in case.observations {
        profile.add(SymptomObservation::new(*id, *severity, *days));
    }
    profile
}

#[test]
fn every_case_ranks_its_condition_within_bounds() {
    let service = service();
    for case in CASES {
        let results = service
            .diagnose(&profile_for(case), None)
            .expect("case symptoms are cataloged");
        let rank = results
            .iter()
            .position(|r| r.disease_id.as_str() == case.expected);
        match rank {
            Some(position) => assert!(
                position < case.within_top,
                "case '{}' ranked {} at position {} (limit {})",
                case.name,
                case.expected,
                position + 1,
                case.within_top
            ),
            None => panic!("case '{}' never scored {}", case.name, case.expected),
        }
    }
}

#[test]
fn top_result_normalizes_to_full_confidence() {
    let service = service();
    for case in CASES {
        let results = service
            .diagnose(&profile_for(case), None)
            .expect("case symptoms are cataloged");
        assert_eq!(results[0].confidence, 1.0, "case '{}'", case.name);
        assert!(results
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence));
    }
}

#[test]
fn top_candidates_survive_backward_verification() {
    let service = service();
    // Single-condition presentations should verify cleanly against their
    // own diagnosis.
    for case in CASES.iter().filter(|c| c.within_top == 1) {
        let profile = profile_for(case);
        let report = service
            .verify(&DiseaseId::from(case.expected), &profile)
            .expect("disease is cataloged");
        assert!(
            report.outcome.is_admissible(),
            "case '{}' rejected: {}",
            case.name,
            report.explanation
        );
    }
}

#[test]
fn pattern_analysis_follows_the_top_result() {
    let service = service();
    let case = &CASES[0];
    let profile = profile_for(case);

    let summary = service.analyze(&profile, true).expect("analyze");
    assert_eq!(summary.total_symptoms, case.observations.len());
    assert!(summary.average_severity > 2.0);
    assert!(!summary.suggested_tests.is_empty());
}
