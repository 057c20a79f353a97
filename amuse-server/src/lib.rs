//! amuse-server library - now-playing query service
//!
//! Serves a snapshot of what the music player is playing in the shape the
//! now-playing widget protocol expects.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod provider;
pub mod server;
pub mod snapshot;

use provider::StateProvider;

pub use server::{QueryServer, ServerHandle};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only handle to the live player
    pub provider: Arc<dyn StateProvider>,
    /// Limit on one provider read; `None` waits for as long as it takes
    pub provider_timeout: Option<Duration>,
}

impl AppState {
    /// Create new application state
    pub fn new(provider: Arc<dyn StateProvider>, provider_timeout: Option<Duration>) -> Self {
        Self {
            provider,
            provider_timeout,
        }
    }
}

/// Build application router
///
/// The widget protocol has exactly one route.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/query", get(api::get_query))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
