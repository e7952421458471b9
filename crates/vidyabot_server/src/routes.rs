//! Router construction and request handlers.

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};
use vidyabot_core::ChatReply;
use vidyabot_interface::ChatModel;

use crate::config::{Environment, ServerConfig};
use crate::history::translate_history;
use crate::response::ApiError;

/// Chat payloads are small; the limit guards against oversized bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared application state: the upstream model behind its trait seam plus
/// the immutable configuration. No mutable state is shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// The upstream chat model
    pub model: Arc<dyn ChatModel>,
    /// Resolved server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(model: Arc<dyn ChatModel>, config: Arc<ServerConfig>) -> Self {
        Self { model, config }
    }
}

/// Creates the full application router: API routes, API 404 fallback, and
/// the SPA static fallback for everything else.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .fallback(api_not_found)
        .with_state(state.clone());

    let index = state.config.static_dir.join("index.html");
    let spa = ServeDir::new(&state.config.static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .nest("/api", api)
        .fallback_service(spa)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// `POST /api/chat`: one user turn in, one bot reply out.
#[instrument(skip_all)]
async fn chat(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<ChatReply>, ApiError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    let message = body.get("message").cloned().unwrap_or(Value::Null);
    let Some(text) = message.as_str().filter(|t| !t.trim().is_empty()) else {
        warn!("Rejected chat request: invalid message");
        // Echo what arrived: its JSON type, and a length when it has one.
        let mut received = json!({ "type": json_type_name(&message) });
        if let Some(s) = message.as_str() {
            received["length"] = json!(s.len());
        }
        return Err(ApiError::validation(
            "A valid non-empty message string is required.",
            received,
        ));
    };

    let history = body.get("history").cloned().unwrap_or(Value::Null);
    if !history.is_array() {
        warn!("Rejected chat request: invalid history");
        return Err(ApiError::validation(
            "A valid history array is required.",
            Value::String(json_type_name(&history).to_string()),
        ));
    }

    let turns = translate_history(&history);
    debug!(
        message_len = text.len(),
        history_len = turns.len(),
        "Forwarding chat request upstream"
    );

    let reply = state
        .model
        .reply(&turns, text)
        .await
        .map_err(|e| ApiError::upstream(e, state.config.expose_details()))?;

    info!(
        reply_len = reply.text.len(),
        source_count = reply.sources.len(),
        "Chat reply served"
    );
    Ok(Json(reply))
}

/// `GET /api/health`: liveness plus configuration summary.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": state.config.environment.to_string(),
        "apiKeyConfigured": state.config.api_key_configured(),
        "port": state.config.port,
    }))
}

/// Unknown `/api/*` paths get a JSON 404 rather than the SPA shell.
async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API endpoint not found" })),
    )
}

/// JSON type name for validation echoes, mirroring `typeof` in the client.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build the CORS layer for the configured deployment mode.
///
/// Development mode adds localhost defaults to any configured origins.
/// Production requires explicit origins; with none configured, cross-origin
/// requests are effectively denied.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!(origin = %origin, "CORS: ignoring invalid origin");
                None
            })
        })
        .collect();

    if config.environment == Environment::Development {
        for origin in ["http://localhost:3000", "http://localhost:5173"] {
            if let Ok(value) = origin.parse::<HeaderValue>() {
                if !origins.contains(&value) {
                    origins.push(value);
                }
            }
        }
    }

    if origins.is_empty() {
        warn!("CORS: no origins configured, denying all cross-origin requests");
        return CorsLayer::new().allow_origin(AllowOrigin::exact(HeaderValue::from_static("null")));
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
