//! # MoodLens Common Library
//!
//! Shared code for the MoodLens sentiment service including:
//! - Sentiment scoring (text polarity blended with emoji weights)
//! - Result store models and queries
//! - CSV export rendering
//! - Configuration loading and root folder resolution
//! - Timestamp and rounding helpers

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod scoring;
pub mod time;

pub use error::{Error, Result};
pub use scoring::{Category, Scorer, SentimentResult};
