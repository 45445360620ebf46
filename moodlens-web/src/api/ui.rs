//! UI routes: HTML pages and the CSV download

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use moodlens_common::db::fetch_history;
use serde::Deserialize;

use super::{download_csv, render, score_and_store};
use crate::{ApiResult, AppState};

/// Submitted form; a missing `text` field is treated as empty
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub text: String,
}

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index).post(submit_form))
        .route("/history", get(history_page))
        .route("/download", get(download_csv))
}

/// GET /
pub async fn serve_index() -> Html<String> {
    Html(render::index_page())
}

/// POST /
///
/// Scores and stores the submitted text, then shows the result.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> ApiResult<Html<String>> {
    let (result, _record) = score_and_store(&state, &form.text).await?;
    Ok(Html(render::result_page(&result)))
}

/// GET /history
pub async fn history_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let records = fetch_history(&state.db).await?;
    Ok(Html(render::history_page(&records)))
}
