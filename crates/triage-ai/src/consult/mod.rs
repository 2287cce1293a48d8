//! Consultation workflow: patient profiles, the forward-chaining diagnosis
//! engine, backward-chaining verification, pattern analysis, and the service
//! facade plus HTTP router that expose them.

pub mod analysis;
pub mod engine;
pub mod profile;
pub mod router;
pub mod service;
pub mod verify;

pub(crate) mod scoring;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::knowledge::{DiseaseId, SymptomId};

pub use analysis::PatternSummary;
pub use engine::{diagnose, DiagnosisConfig, DiagnosisResult, RiskLevel};
pub use profile::{PatientProfile, SymptomObservation};
pub use router::consultation_router;
pub use service::ConsultationService;
pub use verify::{verify, VerificationOutcome, VerificationReport};

/// Consultation failures caused by references to uncataloged data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConsultError {
    #[error("unknown symptom id '{0}' in patient profile")]
    UnknownSymptom(SymptomId),
    #[error("unknown disease id '{0}'")]
    UnknownDisease(DiseaseId),
}
