//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::planner::{PathResult, SearchMode, UnknownSearchMode};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations, optionally filtered by a case-insensitive substring.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationListResponse> {
    let network = state.network();
    let needle = req
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let limit = req.limit.unwrap_or(usize::MAX);

    let stations = network
        .stations()
        .filter(|station| {
            needle
                .as_deref()
                .is_none_or(|needle| station.as_str().to_lowercase().contains(needle))
        })
        .take(limit)
        .map(|station| StationResult::from_station(network, station))
        .collect();

    Json(StationListResponse { stations })
}

/// Plan a route between two stations or attractions.
///
/// An endpoint that matches neither a station nor an attraction produces an
/// unreachable result, not an error.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let mode = match req.mode.as_deref() {
        None => SearchMode::Distance,
        Some(mode) => mode.parse::<SearchMode>()?,
    };

    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "both from and to are required".to_string(),
        });
    }

    let network = state.network();
    let start = network.resolve(&req.from, &state.attractions);
    let end = network.resolve(&req.to, &state.attractions);

    let response = match (start, end) {
        (Some(start), Some(end)) => {
            let result = state
                .planner
                .route(&start, &end, mode)
                .await
                .map_err(|e| AppError::Internal {
                    message: format!("Route search failed: {e}"),
                })?;
            debug!(
                cached_routes = state.planner.cached_routes(),
                "Route served"
            );
            RouteResponse::from_result(start.to_string(), end.to_string(), mode, &result)
        }
        _ => RouteResponse::from_result(
            req.from.trim().to_string(),
            req.to.trim().to_string(),
            mode,
            &PathResult::unreachable(),
        ),
    };

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<UnknownSearchMode> for AppError {
    fn from(e: UnknownSearchMode) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "Bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
