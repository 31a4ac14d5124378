//! Application state for the web layer.

use std::sync::Arc;

use crate::repository::RideShare;

/// Shared application state.
///
/// The directory is loaded once at start-up and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub ride_share: Arc<RideShare>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ride_share: RideShare) -> Self {
        Self {
            ride_share: Arc::new(ride_share),
        }
    }
}
