//! History endpoints

use axum::{extract::State, routing::get, Json, Router};
use moodlens_common::db::{fetch_history, ResultRecord};

use crate::{ApiResult, AppState};

/// GET /api/history
///
/// All stored results, newest first.
pub async fn history_json(State(state): State<AppState>) -> ApiResult<Json<Vec<ResultRecord>>> {
    let records = fetch_history(&state.db).await?;
    Ok(Json(records))
}

/// Build history routes
pub fn history_routes() -> Router<AppState> {
    Router::new().route("/api/history", get(history_json))
}
