use super::common::*;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

fn post_json(uri: &str, payload: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&payload).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn diagnose_route_returns_ranked_results() {
    let router = standard_router();
    let payload = json!({
        "symptoms": [
            { "symptom_id": "fever", "severity": "severe", "duration_days": 3 },
            { "symptom_id": "fatigue", "severity": "severe", "duration_days": 3 },
            { "symptom_id": "muscle-pain", "severity": "severe", "duration_days": 3 },
            { "symptom_id": "headache", "severity": "moderate", "duration_days": 3 }
        ],
        "max_results": 3
    });

    let response = router
        .oneshot(post_json("/api/v1/consult/diagnose", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let results = body.as_array().expect("ranked array");
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].get("disease_id").and_then(|v| v.as_str()),
        Some("influenza")
    );
    assert_eq!(
        results[0].get("confidence").and_then(|v| v.as_f64()),
        Some(1.0)
    );
}

#[tokio::test]
async fn diagnose_route_rejects_unknown_symptom() {
    let router = standard_router();
    let payload = json!({
        "symptoms": [
            { "symptom_id": "not-a-symptom", "severity": "mild", "duration_days": 1 }
        ]
    });

    let response = router
        .oneshot(post_json("/api/v1/consult/diagnose", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body
        .get("error")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .contains("not-a-symptom"));
}

#[tokio::test]
async fn verify_route_reports_missing_required() {
    let router = standard_router();
    let payload = json!({
        "disease_id": "influenza",
        "symptoms": [
            { "symptom_id": "fatigue", "severity": "moderate", "duration_days": 3 }
        ]
    });

    let response = router
        .oneshot(post_json("/api/v1/consult/verify", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("outcome").and_then(|o| o.get("outcome")).and_then(|v| v.as_str()),
        Some("rejected_missing_required")
    );
}

#[tokio::test]
async fn verify_route_returns_not_found_for_unknown_disease() {
    let router = standard_router();
    let payload = json!({
        "disease_id": "ghost",
        "symptoms": []
    });

    let response = router
        .oneshot(post_json("/api/v1/consult/verify", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analyze_route_returns_a_pattern_summary() {
    let router = standard_router();
    let payload = json!({
        "symptoms": [
            { "symptom_id": "fever", "severity": "severe", "duration_days": 3 },
            { "symptom_id": "fatigue", "severity": "severe", "duration_days": 3 }
        ],
        "include_top_result": true
    });

    let response = router
        .oneshot(post_json("/api/v1/consult/analyze", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total_symptoms").and_then(|v| v.as_u64()), Some(2));
    assert!(body.get("suggested_tests").is_some());
}

#[tokio::test]
async fn catalog_symptom_listing_honors_category_filter() {
    let router = standard_router();
    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/catalog/symptoms?category=urinary")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let symptoms = body.as_array().expect("symptom array");
    assert!(!symptoms.is_empty());
    assert!(symptoms
        .iter()
        .all(|s| s.get("category").and_then(|v| v.as_str()) == Some("urinary")));
}

#[tokio::test]
async fn catalog_disease_listing_returns_full_catalog() {
    let router = standard_router();
    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/catalog/diseases")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().map(|d| d.len()), Some(10));
}
