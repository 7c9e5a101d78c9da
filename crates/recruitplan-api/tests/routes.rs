use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use recruitplan_api::app::router;
use recruitplan_api::state::AppState;
use recruitplan_engine::PlannerSettings;

fn app() -> Router {
    router(AppState::new(
        recruitplan_reference::builtin().clone(),
        PlannerSettings::default(),
    ))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_builtin_references() {
    let (status, body) = get("/references").await;
    assert_eq!(status, StatusCode::OK);
    let diseases = body.as_array().unwrap();
    assert_eq!(diseases.len(), 4);
    assert_eq!(diseases[0]["disease"], "Alzheimer's");
    assert_eq!(diseases[0]["therapeutic_area"], "Neuro");
    assert_eq!(diseases[0]["trials"], json!(["Reveli", "South Commons", "Custom"]));
}

#[tokio::test]
async fn resolves_a_reference_by_disease() {
    let (status, body) = get("/references/Schizophrenia").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_age_band"], "all_ages");

    let (status, body) = get("/references/Gout").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Gout"));
    assert!(body.get("issue").is_none());
}

#[tokio::test]
async fn plan_returns_full_report() {
    let (status, body) = post(
        "/plan",
        json!({ "disease": "Alzheimer's", "target_total": 1000 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["population"]["total"], 6_900_000);
    assert_eq!(body["focus"][0]["label"], "Hispanic");
    assert_eq!(body["focus"][0]["need"]["metric"], "screen_percent");
    assert_eq!(body["issues"], json!([]));
}

#[tokio::test]
async fn plan_for_unknown_trial_is_not_found() {
    let (status, _) = post(
        "/plan",
        json!({ "disease": "Alzheimer's", "trial": "Nope", "target_total": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn gaps_reject_unbalanced_targets() {
    let (status, body) = post(
        "/gaps",
        json!({
            "targets": {
                "dimension": "Race",
                "subgroups": [
                    { "label": "Hispanic", "percent": 50.0 },
                    { "label": "Other", "percent": 47.0 }
                ]
            },
            "target_total": 100,
            "current": {
                "dimension": "Race",
                "breakdown": { "kind": "counts", "counts": [], "remainder_label": null }
            },
            "current_total": 0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("97.00"));
    assert_eq!(body["issue"]["kind"], "percent_sum");
    assert_eq!(body["issue"]["dimension"], "Race");
}

#[tokio::test]
async fn gaps_are_ordered_on_request() {
    let (status, body) = post(
        "/gaps",
        json!({
            "targets": {
                "dimension": "Gender",
                "subgroups": [
                    { "label": "Female", "percent": 40.0 },
                    { "label": "Male", "percent": 60.0 }
                ]
            },
            "target_total": 100,
            "current": {
                "dimension": "Gender",
                "breakdown": {
                    "kind": "counts",
                    "counts": [{ "label": "Female", "count": 30 }],
                    "remainder_label": "Male"
                }
            },
            "current_total": 50,
            "order": "absolute_gap"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gaps"][0]["label"], "Male");
    assert_eq!(body["gaps"][0]["absolute_gap"], 40);
    assert_eq!(body["gaps"][1]["absolute_gap"], 10);
}

#[tokio::test]
async fn screening_ranks_results_and_reports_bad_items() {
    let (status, body) = post(
        "/screening",
        json!({
            "items": [
                {
                    "target": { "label": "Male", "target_percent": 36.0, "target_count": 360 },
                    "parameters": { "label": "Male", "screen_success_rate": 0.7, "eligible_population": 2484000 }
                },
                {
                    "target": { "label": "Female", "target_percent": 64.0, "target_count": 640 },
                    "parameters": { "label": "Female", "screen_success_rate": 0.3, "eligible_population": 4416000 }
                },
                {
                    "target": { "label": "Other", "target_percent": 1.0, "target_count": 10 },
                    "parameters": { "label": "Other", "screen_success_rate": 1.5, "eligible_population": 10 }
                }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["label"], "Female");
    assert_eq!(body["results"][0]["screened_needed"], 2134);
    assert_eq!(body["results"][1]["screened_needed"], 515);
    assert_eq!(body["issues"][0]["kind"], "success_rate_out_of_range");
}
