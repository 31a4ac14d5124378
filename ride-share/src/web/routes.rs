//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::domain::{RecordId, ValidationError};
use crate::report::{DriverReport, PassengerReport, TripReport};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/drivers", get(list_drivers))
        .route("/drivers/:id", get(get_driver))
        .route("/drivers/:id/trips", get(driver_trips))
        .route("/passengers", get(list_passengers))
        .route("/passengers/:id", get(get_passenger))
        .route("/passengers/:id/trips", get(passenger_trips))
        .route("/trips/:id", get(get_trip))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Validate a path id.
fn record_id(raw: i64) -> Result<RecordId, AppError> {
    RecordId::new(raw).map_err(AppError::from)
}

/// All drivers, in id order.
async fn list_drivers(State(state): State<AppState>) -> Json<Vec<DriverReport>> {
    Json(
        state
            .ride_share
            .drivers()
            .map(DriverReport::from_driver)
            .collect(),
    )
}

/// One driver's summary.
async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DriverReport>, AppError> {
    let id = record_id(id)?;
    let driver = state
        .ride_share
        .driver(id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("driver {id} not found"),
        })?;
    Ok(Json(DriverReport::from_driver(driver)))
}

/// One driver's trips, in the order they were added.
async fn driver_trips(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TripReport>>, AppError> {
    let id = record_id(id)?;
    let driver = state
        .ride_share
        .driver(id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("driver {id} not found"),
        })?;
    Ok(Json(
        driver.trips().iter().map(|t| TripReport::from_trip(t)).collect(),
    ))
}

/// All passengers, in id order.
async fn list_passengers(State(state): State<AppState>) -> Json<Vec<PassengerReport>> {
    Json(
        state
            .ride_share
            .passengers()
            .map(PassengerReport::from_passenger)
            .collect(),
    )
}

/// One passenger's summary.
async fn get_passenger(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PassengerReport>, AppError> {
    let id = record_id(id)?;
    let passenger = state
        .ride_share
        .passenger(id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("passenger {id} not found"),
        })?;
    Ok(Json(PassengerReport::from_passenger(passenger)))
}

/// One passenger's trips, in the order they were added.
async fn passenger_trips(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TripReport>>, AppError> {
    let id = record_id(id)?;
    let passenger = state
        .ride_share
        .passenger(id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("passenger {id} not found"),
        })?;
    Ok(Json(
        passenger
            .trips()
            .iter()
            .map(|t| TripReport::from_trip(t))
            .collect(),
    ))
}

/// One trip, with its driver and passenger resolved by id.
async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TripDetailResponse>, AppError> {
    let id = record_id(id)?;
    let ride_share = &state.ride_share;
    let trip = ride_share.trip(id).ok_or_else(|| AppError::NotFound {
        message: format!("trip {id} not found"),
    })?;

    Ok(Json(TripDetailResponse {
        trip: TripReport::from_trip(trip),
        driver_name: ride_share.trip_driver(trip).map(|d| d.name().to_string()),
        passenger_name: ride_share
            .trip_passenger(trip)
            .map(|p| p.name().to_string()),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
