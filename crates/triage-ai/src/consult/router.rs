use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::knowledge::{DiseaseId, SeverityLevel, SymptomCategory};

use super::profile::{PatientProfile, SymptomObservation};
use super::service::ConsultationService;
use super::ConsultError;

/// Router builder exposing HTTP endpoints for consultation and catalog access.
pub fn consultation_router(service: Arc<ConsultationService>) -> Router {
    Router::new()
        .route("/api/v1/consult/diagnose", post(diagnose_handler))
        .route("/api/v1/consult/verify", post(verify_handler))
        .route("/api/v1/consult/analyze", post(analyze_handler))
        .route("/api/v1/catalog/symptoms", get(list_symptoms_handler))
        .route("/api/v1/catalog/diseases", get(list_diseases_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObservationRequest {
    pub symptom_id: String,
    pub severity: SeverityLevel,
    pub duration_days: u32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiagnoseRequest {
    pub symptoms: Vec<ObservationRequest>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyRequest {
    pub disease_id: String,
    pub symptoms: Vec<ObservationRequest>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub symptoms: Vec<ObservationRequest>,
    #[serde(default = "default_include_top")]
    pub include_top_result: bool,
}

fn default_include_top() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(crate) struct SymptomListQuery {
    #[serde(default)]
    pub category: Option<SymptomCategory>,
}

fn build_profile(symptoms: Vec<ObservationRequest>) -> PatientProfile {
    let mut profile = PatientProfile::new();
    for request in symptoms {
        let mut observation = SymptomObservation::new(
            request.symptom_id.as_str(),
            request.severity,
            request.duration_days,
        );
        observation.note = request.note;
        profile.add(observation);
    }
    profile
}

fn error_response(error: ConsultError) -> Response {
    let status = match &error {
        ConsultError::UnknownSymptom(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ConsultError::UnknownDisease(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn diagnose_handler(
    State(service): State<Arc<ConsultationService>>,
    axum::Json(request): axum::Json<DiagnoseRequest>,
) -> Response {
    let profile = build_profile(request.symptoms);
    match service.diagnose(&profile, request.max_results) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn verify_handler(
    State(service): State<Arc<ConsultationService>>,
    axum::Json(request): axum::Json<VerifyRequest>,
) -> Response {
    let profile = build_profile(request.symptoms);
    let disease_id = DiseaseId(request.disease_id);
    match service.verify(&disease_id, &profile) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<ConsultationService>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response {
    let profile = build_profile(request.symptoms);
    match service.analyze(&profile, request.include_top_result) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_symptoms_handler(
    State(service): State<Arc<ConsultationService>>,
    Query(query): Query<SymptomListQuery>,
) -> Response {
    let symptoms: Vec<_> = service.store().symptoms(query.category).collect();
    (StatusCode::OK, axum::Json(symptoms)).into_response()
}

pub(crate) async fn list_diseases_handler(
    State(service): State<Arc<ConsultationService>>,
) -> Response {
    let diseases: Vec<_> = service.store().diseases().collect();
    (StatusCode::OK, axum::Json(diseases)).into_response()
}
