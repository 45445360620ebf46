//! Scoring endpoints
//!
//! Every analysis is scored, then appended to the store as one row. A
//! provider failure aborts the request before anything is written.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use moodlens_common::db::{fetch_result, insert_result, NewResultRecord, ResultRecord};
use moodlens_common::{time, Category, SentimentResult};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{ApiError, ApiResult, AppState};

/// Body of `POST /api/analyze`; a missing `text` is treated as empty
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// Scores rounded to 2 decimals, as stored
#[derive(Debug, Serialize)]
pub struct RoundedScores {
    pub polarity: f64,
    pub emoji_score: f64,
    pub final_score: f64,
}

/// Response of `POST /api/analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: i64,
    pub input_text: String,
    pub text_polarity: f64,
    pub emoji_polarity: f64,
    pub final_score: f64,
    pub category: Category,
    pub mood: String,
    /// "<Category> (<Mood>)"
    pub label: String,
    /// Face matching the category
    pub indicator: String,
    pub rounded: RoundedScores,
    pub timestamp: String,
}

impl AnalyzeResponse {
    fn new(result: &SentimentResult, record: &ResultRecord) -> Self {
        Self {
            id: record.id,
            input_text: result.input_text.clone(),
            text_polarity: result.text_polarity,
            emoji_polarity: result.emoji_polarity,
            final_score: result.final_score,
            category: result.category,
            mood: result.mood.to_string(),
            label: result.label(),
            indicator: result.category.indicator().to_string(),
            rounded: RoundedScores {
                polarity: record.polarity,
                emoji_score: record.emoji_score,
                final_score: record.final_score,
            },
            timestamp: record.timestamp.clone(),
        }
    }
}

/// Score `text` and append the result to the store
///
/// Returns the full-precision result together with the stored row.
pub async fn score_and_store(
    state: &AppState,
    text: &str,
) -> ApiResult<(SentimentResult, ResultRecord)> {
    let result = state.scorer.analyze(text).map_err(|e| {
        error!("Scoring failed, nothing stored: {}", e);
        ApiError::from(e)
    })?;

    let new_record = NewResultRecord::from_result(&result, time::timestamp_now());
    let id = insert_result(&state.db, &new_record).await?;

    info!(
        id,
        final_score = new_record.final_score,
        "Stored result: {}",
        new_record.sentiment
    );

    let record = ResultRecord {
        id,
        input_text: new_record.input_text,
        sentiment: new_record.sentiment,
        polarity: new_record.polarity,
        emoji_score: new_record.emoji_score,
        final_score: new_record.final_score,
        timestamp: new_record.timestamp,
    };

    Ok((result, record))
}

/// POST /api/analyze
pub async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let (result, record) = score_and_store(&state, &request.text).await?;
    Ok(Json(AnalyzeResponse::new(&result, &record)))
}

/// GET /api/results/:id
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ResultRecord>> {
    fetch_result(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("result {}", id)))
}

/// Build scoring routes
pub fn analyze_routes() -> Router<AppState> {
    Router::new()
        .route("/api/analyze", post(analyze_json))
        .route("/api/results/:id", get(get_result))
}
