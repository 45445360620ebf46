//! CSV download

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use moodlens_common::db::fetch_all_results;
use moodlens_common::export::{render_csv, CSV_FILENAME};
use tracing::info;

use crate::{ApiResult, AppState};

/// GET /download
///
/// Every stored result as a CSV attachment, oldest first.
pub async fn download_csv(State(state): State<AppState>) -> ApiResult<Response> {
    let records = fetch_all_results(&state.db).await?;
    info!("Exporting {} results as CSV", records.len());

    let body = render_csv(&records);
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CSV_FILENAME),
        ),
    ];

    Ok((StatusCode::OK, headers, body).into_response())
}
