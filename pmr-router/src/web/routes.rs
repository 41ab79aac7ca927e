//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{ConnectionInput, Station, StationInput};
use crate::index::IndexError;
use crate::planner::{CancelToken, ItineraryAssembler, RouteError, RouteOptions, RouteOutcome};
use crate::search::{
    DEFAULT_NAME_LIMIT, DEFAULT_NEARBY_LIMIT, DEFAULT_RADIUS_METERS, GeoSearch, NameSearch,
    SearchError,
};

use super::dto::*;
use super::state::AppState;

/// Largest result count a client may ask for.
const MAX_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", post(upsert_station))
        .route("/api/connections", post(upsert_connection))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/nearby", get(nearby_stations))
        .route("/api/stations/nearby/accessible", get(accessible_nearby_stations))
        .route("/api/stations/:id", get(get_station))
        .route("/api/route", get(find_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Insert or replace a station.
async fn upsert_station(
    State(state): State<AppState>,
    Json(input): Json<StationInput>,
) -> Result<StatusCode, AppError> {
    state.index.upsert_station(input)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Insert or replace a connection.
async fn upsert_connection(
    State(state): State<AppState>,
    Json(input): Json<ConnectionInput>,
) -> Result<StatusCode, AppError> {
    state.index.upsert_connection(input)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a single station.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    state
        .index
        .get_station_by_id(&id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Station {id} not found"),
        })
}

/// Search stations by name or id.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Result<Json<StationSearchResponse>, AppError> {
    let limit = req.limit.unwrap_or(DEFAULT_NAME_LIMIT).min(MAX_LIMIT);
    let stations = NameSearch::new(&state.index).search_stations(&req.q, limit)?;
    Ok(Json(StationSearchResponse { stations }))
}

/// Stations within a radius, nearest first.
async fn nearby_stations(
    State(state): State<AppState>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    let radius = req.radius.unwrap_or(DEFAULT_RADIUS_METERS);
    let limit = req.limit.unwrap_or(DEFAULT_NEARBY_LIMIT).min(MAX_LIMIT);
    let stations = GeoSearch::new(&state.index).find_nearby(req.lat, req.lon, radius, limit)?;
    Ok(Json(NearbyResponse { stations }))
}

/// Accessible stations within a radius, nearest first.
async fn accessible_nearby_stations(
    State(state): State<AppState>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    let radius = req.radius.unwrap_or(DEFAULT_RADIUS_METERS);
    let stations = GeoSearch::new(&state.index).find_accessible_nearby(req.lat, req.lon, radius)?;
    Ok(Json(NearbyResponse { stations }))
}

/// Find and price the best route between two stations.
///
/// The search runs on the blocking pool under the configured deadline.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let options = RouteOptions::new(
        req.max_transfers.unwrap_or(state.config.default_max_transfers),
        req.require_accessibility.unwrap_or(true),
    );
    let cancel = CancelToken::with_timeout(state.config.deadline());
    let _guard = CancelOnDrop(cancel.clone());

    let index = Arc::clone(&state.index);
    let config = Arc::clone(&state.config);
    let outcome = tokio::task::spawn_blocking(move || {
        ItineraryAssembler::new(&index, &config).build_itinerary(&req.from, &req.to, options, &cancel)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("route search task failed: {e}"),
    })??;

    match outcome {
        RouteOutcome::Found(itinerary) => Ok(Json(RouteResponse::Found {
            itinerary: ItineraryResult::from_itinerary(&itinerary),
        })),
        RouteOutcome::NoRouteFound => Ok(Json(RouteResponse::NoRoute)),
        RouteOutcome::StationNotFound(id) => Err(AppError::NotFound {
            message: format!("Station {id} not found"),
        }),
    }
}

/// Stops the blocking search if the client goes away.
struct CancelOnDrop(CancelToken);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Timeout { message: String },
    Internal { message: String },
}

impl From<IndexError> for AppError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            IndexError::Store(_) => AppError::Unavailable {
                message: e.to_string(),
            },
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Store(_) => AppError::Unavailable {
                message: e.to_string(),
            },
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::InvalidRequest(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::Cancelled => AppError::Timeout {
                message: e.to_string(),
            },
            RouteError::Store(_) => AppError::Unavailable {
                message: e.to_string(),
            },
            RouteError::Assembly(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Timeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
