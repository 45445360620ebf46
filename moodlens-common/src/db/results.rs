//! Queries over the `results` table

use sqlx::SqlitePool;
use tracing::debug;

use super::models::{NewResultRecord, ResultRecord};
use crate::Result;

const SELECT_COLUMNS: &str =
    "SELECT id, input, sentiment, polarity, emoji_sent, final_score, timestamp FROM results";

/// Append one row; returns the assigned id
///
/// A single INSERT statement, so a row is either fully visible or absent.
pub async fn insert_result(pool: &SqlitePool, record: &NewResultRecord) -> Result<i64> {
    let outcome = sqlx::query(
        r#"
        INSERT INTO results (input, sentiment, polarity, emoji_sent, final_score, timestamp)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.input_text)
    .bind(&record.sentiment)
    .bind(record.polarity)
    .bind(record.emoji_score)
    .bind(record.final_score)
    .bind(&record.timestamp)
    .execute(pool)
    .await?;

    let id = outcome.last_insert_rowid();
    debug!("Inserted result row {}", id);
    Ok(id)
}

/// All rows, newest first
pub async fn fetch_history(pool: &SqlitePool) -> Result<Vec<ResultRecord>> {
    let records = sqlx::query_as::<_, ResultRecord>(&format!("{} ORDER BY id DESC", SELECT_COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(records)
}

/// All rows in insertion order, for export
pub async fn fetch_all_results(pool: &SqlitePool) -> Result<Vec<ResultRecord>> {
    let records = sqlx::query_as::<_, ResultRecord>(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(records)
}

/// Look up one row by id
pub async fn fetch_result(pool: &SqlitePool, id: i64) -> Result<Option<ResultRecord>> {
    let record = sqlx::query_as::<_, ResultRecord>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(record)
}

/// Number of stored rows
pub async fn count_results(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM results")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
