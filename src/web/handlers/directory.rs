// GET /api/directory — everything the listing page renders from.
//
// Profiles, the discipline filter list, both hierarchies (category order
// preserved), the lower-cased filter term lists and the matching vocabularies.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::AppState;

pub async fn get_directory(State(state): State<AppState>) -> Response {
    match state.directory() {
        Ok(dir) => Json(dir.view()).into_response(),
        Err(resp) => resp,
    }
}
