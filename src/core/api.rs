//! HTTP API for PEK Lite
//!
//! Endpoints:
//! - GET  /health - Health check
//! - POST /infer  - JSON report (`?diagnostics=true` adds scoring detail)
//! - POST /report - HTML report page
//!
//! The engine is synchronous and stateless; handlers call it directly.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::{render_html, PersonalityEngine};
use crate::types::{RawInput, Report};

/// App state
pub struct AppState {
    pub engine: PersonalityEngine,
    pub max_responses: usize,
    pub diagnostics: bool,
}

/// Inference request body
#[derive(Debug, Deserialize)]
pub struct InferenceRequest {
    /// Loosely typed so that non-string entries can be dropped, not rejected
    pub responses: Vec<Value>,
    /// Accepted for compatibility; never changes the report
    #[serde(default)]
    pub context_flags: Option<Map<String, Value>>,
    /// Accepted for compatibility; never changes the report
    #[serde(default)]
    pub forced_overrides: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InferQuery {
    #[serde(default)]
    pub diagnostics: Option<bool>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine: String,
    pub version: String,
}

/// Request validation failures
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No responses provided")]
    NoResponses,

    #[error("Too many responses: {got} (limit {limit})")]
    TooManyResponses { got: usize, limit: usize },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "request rejected");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        engine: PersonalityEngine::new(),
        max_responses: config.max_responses,
        diagnostics: config.diagnostics,
    });

    Router::new()
        .route("/health", get(health))
        .route("/infer", post(infer))
        .route("/report", post(report))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        engine: crate::ENGINE_NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// JSON report
async fn infer(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InferQuery>,
    Json(req): Json<InferenceRequest>,
) -> Result<Json<Report>, ApiError> {
    let input = validate(&state, &req)?;
    let with_diagnostics = query.diagnostics.unwrap_or(state.diagnostics);

    let report = if with_diagnostics {
        state.engine.analyze_with_diagnostics(&input)
    } else {
        state.engine.analyze(&input)
    };

    info!(
        responses = input.len(),
        depth = %report.depth_rating.label,
        "infer served"
    );
    Ok(Json(report))
}

/// HTML report page
async fn report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InferenceRequest>,
) -> Result<Html<String>, ApiError> {
    let input = validate(&state, &req)?;
    let report = state.engine.analyze(&input);

    info!(
        responses = input.len(),
        depth = %report.depth_rating.label,
        "report served"
    );
    Ok(Html(render_html(&report)))
}

/// Reject empty or oversized requests; drop non-string entries
fn validate(state: &AppState, req: &InferenceRequest) -> Result<RawInput, ApiError> {
    if req.responses.is_empty() {
        return Err(ApiError::NoResponses);
    }
    if req.responses.len() > state.max_responses {
        return Err(ApiError::TooManyResponses {
            got: req.responses.len(),
            limit: state.max_responses,
        });
    }

    let flags = req.context_flags.as_ref().map_or(0, Map::len);
    let overrides = req.forced_overrides.as_ref().map_or(0, Map::len);
    if flags + overrides > 0 {
        info!(flags, overrides, "auxiliary flags ignored");
    }

    Ok(RawInput::from_values(&req.responses))
}

/// Run the API server
pub async fn run_server(config: &ServerConfig) -> crate::Result<()> {
    let addr = config.socket_addr()?;
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "PEK Lite API listening");
    info!("  GET  /health  - Health check");
    info!("  POST /infer   - JSON report");
    info!("  POST /report  - HTML report");

    axum::serve(listener, router).await?;
    Ok(())
}
