use chrono::Local;
use clap::Args;
use triage_ai::consult::{
    ConsultationService, DiagnosisConfig, PatientProfile, SymptomObservation,
};
use triage_ai::error::AppError;
use triage_ai::knowledge::{DiseaseId, SeverityLevel};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Bundled clinical case to replay (see `validate` for the full list)
    #[arg(long, default_value = "classic influenza")]
    pub(crate) case: String,
    /// Limit the ranked output to the best N candidates
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
}

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

fn profile_for(case: &ClinicalCase) -> PatientProfile {
    let mut profile = PatientProfile::new();
    for (id, severity, days) in case.observations {
        profile.add(SymptomObservation::new(*id, *severity, *days));
    }
    profile
}

fn service() -> Result<ConsultationService, AppError> {
    Ok(ConsultationService::with_standard_catalog(
        DiagnosisConfig::default(),
    )?)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = service()?;
    let case = CASES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(args.case.trim()))
        .unwrap_or(&CASES[0]);

    println!(
        "Symptom triage demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("\nCase: {}", case.name);
    for (id, severity, days) in case.observations {
        println!("  - {id} ({}, {days} day(s))", severity.label());
    }

    let profile = profile_for(case);
    let results = service.diagnose(&profile, Some(args.top))?;

    println!("\nRanked candidates:");
    for (position, result) in results.iter().enumerate() {
        println!(
            "  {}. {} | confidence {:.2} | risk {} | {}",
            position + 1,
            result.disease_name,
            result.confidence,
            result.risk_level.label(),
            result.urgency.label()
        );
        println!("     {}", result.explanation);
    }

    if let Some(top) = results.first() {
        let report = service.verify(&top.disease_id, &profile)?;
        println!("\nBackward verification of {}:", top.disease_name);
        println!("  {} | {}", report.outcome.label(), report.explanation);

        let summary = service.analyze(&profile, true)?;
        println!("\nPattern summary:");
        println!("  symptoms reported: {}", summary.total_symptoms);
        if let Some(category) = summary.dominant_category {
            println!("  dominant category: {}", category.label());
        }
        println!("  average severity: {:.2}", summary.average_severity);
        if !summary.missing_key_symptoms.is_empty() {
            let missing: Vec<&str> = summary
                .missing_key_symptoms
                .iter()
                .map(|id| id.as_str())
                .collect();
            println!("  key symptoms to ask about: {}", missing.join(", "));
        }
        if !summary.suggested_tests.is_empty() {
            println!("  suggested tests: {}", summary.suggested_tests.join(", "));
        }
    }

    Ok(())
}

pub(crate) fn run_validation() -> Result<(), AppError> {
    let service = service()?;
    let mut top1 = 0usize;
    let mut top3 = 0usize;
    let mut misses = Vec::new();

    println!("Replaying {} bundled clinical cases\n", CASES.len());
    for case in CASES {
        let results = service.diagnose(&profile_for(case), None)?;
        let rank = results
            .iter()
            .position(|r| r.disease_id == DiseaseId::from(case.expected));
        let status = match rank {
            Some(0) => {
                top1 += 1;
                top3 += 1;
                "top-1"
            }
            Some(position) if position < 3 => {
                top3 += 1;
                "top-3"
            }
            Some(_) => "ranked low",
            None => "not ranked",
        };
        if rank.map_or(true, |p| p >= case.within_top) {
            misses.push(case.name);
        }
        println!("  {:<34} expected {:<24} {}", case.name, case.expected, status);
    }

    let total = CASES.len();
    println!(
        "\nTop-1 accuracy: {}/{} ({:.0}%)",
        top1,
        total,
        top1 as f64 / total as f64 * 100.0
    );
    println!(
        "Top-3 accuracy: {}/{} ({:.0}%)",
        top3,
        total,
        top3 as f64 / total as f64 * 100.0
    );
    if misses.is_empty() {
        println!("All cases ranked within their expected bounds.");
    } else {
        println!("Cases outside expected bounds: {}", misses.join(", "));
    }

    Ok(())
}
