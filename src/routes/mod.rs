//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard frontend talks only to this server. Read endpoints serve the
//! poller's cached snapshot (fetching live when a feed has never loaded);
//! `POST /api/command` runs the command assistant and `POST /api/render`
//! renders dispatch markup on request.

pub mod command;
pub mod war;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ErrorCode;
use crate::state::AppState;


/// Full API router with CORS, gzip and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/war", get(war::war_status))
        .route("/api/campaign", get(war::campaign))
        .route("/api/planets", get(war::planets))
        .route("/api/planets/{index}", get(war::planet))
        .route("/api/factions", get(war::factions))
        .route("/api/biomes", get(war::biomes))
        .route("/api/statistics", get(war::statistics))
        .route("/api/dispatches", get(war::dispatches))
        .route("/api/briefings", get(war::briefings))
        .route("/api/orders", get(war::orders))
        .route("/api/map", get(war::map))
        .route("/api/snapshot", get(war::refreshed))
        .route("/api/tools", get(command::tools))
        .route("/api/command", post(command::command))
        .route("/api/render", post(command::render))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

/// Error response: an HTTP status plus a JSON body carrying the error code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &impl ErrorCode) -> Self {
        Self {
            status,
            body: ErrorBody { code: err.error_code(), message: err.to_string(), retryable: err.retryable() },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
