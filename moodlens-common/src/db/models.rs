//! Database models

use serde::{Deserialize, Serialize};

use crate::scoring::SentimentResult;
use crate::time::round2;

/// Stored row of the `results` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResultRecord {
    pub id: i64,
    #[sqlx(rename = "input")]
    pub input_text: String,
    /// Display label, e.g. "Positive (Happy)"
    pub sentiment: String,
    /// Text polarity, 2 decimals
    pub polarity: f64,
    /// Emoji polarity, 2 decimals
    #[sqlx(rename = "emoji_sent")]
    pub emoji_score: f64,
    /// Blended score, 2 decimals
    pub final_score: f64,
    /// Local creation time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

/// Row about to be appended; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewResultRecord {
    pub input_text: String,
    pub sentiment: String,
    pub polarity: f64,
    pub emoji_score: f64,
    pub final_score: f64,
    pub timestamp: String,
}

impl NewResultRecord {
    /// Build the row for a scored input, rounding scores to 2 decimals
    pub fn from_result(result: &SentimentResult, timestamp: impl Into<String>) -> Self {
        Self {
            input_text: result.input_text.clone(),
            sentiment: result.label(),
            polarity: round2(result.text_polarity),
            emoji_score: round2(result.emoji_polarity),
            final_score: round2(result.final_score),
            timestamp: timestamp.into(),
        }
    }
}
