// Web server — Axum backend for the supervisor listing page.
//
// The listing page (plain HTML/JS/CSS under web/build) is embedded at compile
// time via include_dir!. All /api/* routes serve JSON built from the
// directory loaded at startup; every other path serves the page.
//
// If the source sheet could not be loaded, the page routes answer 500 with a
// diagnostic explaining how to fix the file, and the API answers 503.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use include_dir::{include_dir, Dir};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::directory::{Directory, LoadState};

pub mod handlers;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/web/build");

/// Shared application state threaded through all Axum handlers.
///
/// The load state is built once before the server starts and only read here.
#[derive(Clone)]
pub struct AppState {
    pub load_state: Arc<LoadState>,
}

impl AppState {
    pub fn new(load_state: LoadState) -> Self {
        Self {
            load_state: Arc::new(load_state),
        }
    }

    /// The loaded directory, or the 503 response the API returns without one.
    pub fn directory(&self) -> Result<&Directory, Response> {
        self.load_state.directory().ok_or_else(|| {
            api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "Supervisor data could not be loaded. Check the server log.",
            )
        })
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(load_state: LoadState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState::new(load_state));

    let addr = format!("{bind}:{port}");
    info!("HLT directory listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/directory", get(handlers::directory::get_directory))
        .route("/api/supervisors", get(handlers::supervisors::list_supervisors))
        .route(
            "/api/supervisors/{name}",
            get(handlers::supervisors::get_supervisor),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(serve_page)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — 200 even when the directory is unavailable.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve the embedded listing page and its assets.
async fn serve_page(
    axum::extract::State(state): axum::extract::State<AppState>,
    uri: Uri,
) -> Response {
    if let LoadState::Unavailable(ref e) = *state.load_state {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(unavailable_page(&e.path().display().to_string())),
        )
            .into_response();
    }

    let path = uri.path().trim_start_matches('/');

    if let Some(file) = ASSETS.get_file(path) {
        return asset_response(file.contents(), path);
    }

    match ASSETS.get_file("index.html") {
        Some(index) => asset_response(index.contents(), "index.html"),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from("Web assets not found in web/build"),
        )
            .into_response(),
    }
}

/// Diagnostic shown instead of the listing when the sheet failed to load.
fn unavailable_page(source: &str) -> String {
    let source = escape_html(source);
    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>HLT Supervisors: data unavailable</title></head>
<body>
<div style="font-family: sans-serif; padding: 40px;">
    <h1>Error: Could not load data</h1>
    <p>The application was unable to find or read <code>{source}</code>.</p>
    <p>Please ensure that:</p>
    <ol>
        <li>The file exists at <strong>{source}</strong> (or set <code>HLT_SOURCE_PATH</code>).</li>
        <li>It is a CSV export of the supervisors sheet with a header row.</li>
    </ol>
    <p>After fixing the issue, please restart the server.</p>
</div>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    let mime = mime_type(path);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript",
        "css" => "text/css",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
