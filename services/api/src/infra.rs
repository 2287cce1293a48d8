use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use triage_ai::config::AppConfig;
use triage_ai::consult::DiagnosisConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn diagnosis_config(config: &AppConfig) -> DiagnosisConfig {
    DiagnosisConfig {
        max_results: config.engine.max_results,
    }
}
