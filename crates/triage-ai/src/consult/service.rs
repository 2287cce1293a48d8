use std::sync::Arc;

use tracing::info;

use crate::knowledge::{CatalogError, DiseaseId, KnowledgeStore};

use super::analysis::{self, PatternSummary};
use super::engine::{self, DiagnosisConfig, DiagnosisResult};
use super::profile::PatientProfile;
use super::verify::{self, VerificationReport};
use super::ConsultError;

/// Facade the HTTP layer (and the demo harness) drives. Holds the shared
/// read-only store; every call is stateless beyond it.
#[derive(Debug, Clone)]
pub struct ConsultationService {
    store: Arc<KnowledgeStore>,
    config: DiagnosisConfig,
}

impl ConsultationService {
    pub fn new(store: Arc<KnowledgeStore>, config: DiagnosisConfig) -> Self {
        Self { store, config }
    }

    pub fn with_standard_catalog(config: DiagnosisConfig) -> Result<Self, CatalogError> {
        let store = KnowledgeStore::standard()?;
        info!(
            diseases = store.disease_count(),
            symptoms = store.symptom_count(),
            "loaded standard knowledge catalog"
        );
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn diagnose(
        &self,
        profile: &PatientProfile,
        max_results: Option<usize>,
    ) -> Result<Vec<DiagnosisResult>, ConsultError> {
        let config = DiagnosisConfig {
            max_results: max_results.or(self.config.max_results),
        };
        let results = engine::diagnose(&self.store, &config, profile)?;
        info!(
            observations = profile.len(),
            candidates = results.len(),
            top = results.first().map(|r| r.disease_id.as_str()).unwrap_or("none"),
            "diagnosis pass complete"
        );
        Ok(results)
    }

    /// Names of every candidate whose normalized confidence clears the
    /// floor, in rank order. A compact differential view over [`Self::diagnose`].
    pub fn differential(
        &self,
        profile: &PatientProfile,
        min_confidence: f64,
    ) -> Result<Vec<String>, ConsultError> {
        let results = engine::diagnose(&self.store, &DiagnosisConfig::default(), profile)?;
        Ok(results
            .into_iter()
            .filter(|r| r.confidence >= min_confidence)
            .map(|r| r.disease_name)
            .collect())
    }

    pub fn verify(
        &self,
        disease_id: &DiseaseId,
        profile: &PatientProfile,
    ) -> Result<VerificationReport, ConsultError> {
        let report = verify::verify(&self.store, disease_id, profile)?;
        info!(
            disease = disease_id.as_str(),
            outcome = report.outcome.label(),
            "verification pass complete"
        );
        Ok(report)
    }

    pub fn analyze(
        &self,
        profile: &PatientProfile,
        include_top_result: bool,
    ) -> Result<PatternSummary, ConsultError> {
        let top = if include_top_result {
            self.diagnose(profile, Some(1))?.into_iter().next()
        } else {
            None
        };
        analysis::analyze(&self.store, profile, top.as_ref())
    }
}
