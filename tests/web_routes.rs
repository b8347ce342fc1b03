// Router tests — status codes and payload shapes for the web layer.
//
// Requests go straight into the axum Router via tower::ServiceExt::oneshot;
// no socket is bound.

#![cfg(feature = "web")]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hlt_directory::classify::SupervisorRecord;
use hlt_directory::directory::{build_profiles, Directory, LoadState};
use hlt_directory::source::SourceError;
use hlt_directory::vocabulary::Vocabulary;
use hlt_directory::web::{build_router, AppState};

fn record(name: &str, discipline: &str, methods: &str, hlt_topics: &str) -> SupervisorRecord {
    SupervisorRecord {
        name: name.to_string(),
        discipline: discipline.to_string(),
        methods: methods.to_string(),
        hlt_topics: hlt_topics.to_string(),
        ..Default::default()
    }
}

fn loaded_router() -> Router {
    let vocab = Vocabulary::builtin().unwrap();
    let records = vec![
        record("Dr Aroha Smith", "Cognition; Social", "surveys, eye tracking", "Memory"),
        record("Prof Ben Lee", "Developmental", "interviews", "Identity"),
    ];
    let profiles = build_profiles(&records, &vocab);
    let dir = Directory::new(profiles, vocab, PathBuf::from("HLT - Supervisors.csv"));
    build_router(AppState::new(LoadState::Loaded(dir)))
}

fn unavailable_router() -> Router {
    let missing = SourceError::NotFound(PathBuf::from("HLT - Supervisors.csv"));
    build_router(AppState::new(LoadState::Unavailable(missing)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ============================================================
// Loaded directory
// ============================================================

#[tokio::test]
async fn health_is_ok() {
    let (status, json) = get_json(loaded_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn directory_returns_contract() {
    let (status, json) = get_json(loaded_router(), "/api/directory").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["supervisors"]["Dr Aroha Smith"]["Methods"],
        serde_json::json!(["eye tracking", "surveys"])
    );
    assert_eq!(
        json["categories"],
        serde_json::json!(["cognition", "developmental", "social"])
    );
    assert!(json["topic_hierarchy"]["Memory"].is_array());
    assert!(json["method_hierarchy"]["Quan"].is_array());
}

#[tokio::test]
async fn supervisors_list_filters_by_category() {
    let (status, json) = get_json(loaded_router(), "/api/supervisors?category=SOCIAL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["of"], 2);
    assert_eq!(json["supervisors"][0]["name"], "Dr Aroha Smith");
}

#[tokio::test]
async fn supervisors_list_filters_by_name_query() {
    let (_, json) = get_json(loaded_router(), "/api/supervisors?q=lee").await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["supervisors"][0]["name"], "Prof Ben Lee");
}

#[tokio::test]
async fn supervisors_list_unfiltered_returns_all() {
    let (_, json) = get_json(loaded_router(), "/api/supervisors").await;
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn supervisor_detail_by_encoded_name() {
    let (status, json) = get_json(loaded_router(), "/api/supervisors/Prof%20Ben%20Lee").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Topics"], serde_json::json!(["identity"]));
    assert_eq!(json["info"], "Focuses on Identity.");
}

#[tokio::test]
async fn supervisor_detail_unknown_is_404() {
    let (status, json) = get_json(loaded_router(), "/api/supervisors/Nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn root_serves_listing_page() {
    let (status, body) = get(loaded_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("HLT Supervisors"));
}

#[tokio::test]
async fn listing_script_syncs_repeated_keyword_boxes() {
    let (status, body) = get(loaded_router(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    let js = String::from_utf8(body).unwrap();
    // Every box sharing a value follows the one that changed.
    assert!(js.contains("querySelectorAll(`input[value=\"${CSS.escape(value)}\"]`)"));
    assert!(js.contains("other.checked = box.checked"));
}

// ============================================================
// Unavailable source
// ============================================================

#[tokio::test]
async fn unavailable_api_is_503() {
    let (status, json) = get_json(unavailable_router(), "/api/directory").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json["error"].is_string());

    let (status, _) = get_json(unavailable_router(), "/api/supervisors").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unavailable_page_is_500_with_diagnostic() {
    let (status, body) = get(unavailable_router(), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Could not load data"));
    assert!(html.contains("HLT - Supervisors.csv"));
}

#[tokio::test]
async fn unavailable_health_still_ok() {
    let (status, _) = get(unavailable_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
}
