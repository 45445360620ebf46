//! moodlens-web library - sentiment web service
//!
//! Scores submitted text, stores every result and serves the history as HTML,
//! JSON and CSV.

use axum::Router;
use chrono::{DateTime, Utc};
use moodlens_common::Scorer;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Module name used for config file lookup and health reporting
pub const MODULE_NAME: &str = "moodlens-web";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Result store connection pool
    pub db: SqlitePool,
    /// Scorer over the configured polarity provider
    pub scorer: Scorer,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, scorer: Scorer) -> Self {
        Self {
            db,
            scorer,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // HTML pages and the CSV download
        .merge(api::ui_routes())
        // JSON API
        .merge(api::analyze_routes())
        .merge(api::history_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
