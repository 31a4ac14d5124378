//! Web layer for ride-share reporting.
//!
//! Read-only HTTP endpoints exposing drivers, passengers and trips with
//! their derived metrics.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
