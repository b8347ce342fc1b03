// Supervisor list and detail handlers.
//
// GET /api/supervisors         — optional ?category= ?topic= ?method= ?q= filters
// GET /api/supervisors/{name}  — single profile
//
// Filtering happens in memory over the startup snapshot; see
// `SupervisorFilter` for the matching rules.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::classify::Profile;
use crate::directory::SupervisorFilter;
use crate::web::{api_error, AppState};

/// GET /api/supervisors — list profiles passing the given filters.
pub async fn list_supervisors(
    State(state): State<AppState>,
    Query(filter): Query<SupervisorFilter>,
) -> Response {
    let dir = match state.directory() {
        Ok(dir) => dir,
        Err(resp) => return resp,
    };

    let supervisors: Vec<serde_json::Value> = dir
        .filtered(&filter)
        .map(|(name, profile)| supervisor_to_json(name, profile))
        .collect();
    let total = supervisors.len();

    Json(serde_json::json!({
        "supervisors": supervisors,
        "total": total,
        "of": dir.profiles.len(),
    }))
    .into_response()
}

/// GET /api/supervisors/{name} — one supervisor's profile.
pub async fn get_supervisor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let dir = match state.directory() {
        Ok(dir) => dir,
        Err(resp) => return resp,
    };

    match dir.get(&name) {
        Some(profile) => Json(supervisor_to_json(&name, profile)).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "Supervisor not found"),
    }
}

fn supervisor_to_json(name: &str, profile: &Profile) -> serde_json::Value {
    let mut value = serde_json::to_value(profile).unwrap_or(serde_json::Value::Null);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("name".to_string(), serde_json::Value::from(name));
    }
    value
}
