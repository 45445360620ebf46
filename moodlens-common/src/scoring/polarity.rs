//! Text polarity provider seam
//!
//! The scorer never computes text sentiment itself; it asks a
//! [`PolarityProvider`] for a signed score and blends that with the emoji score.

use thiserror::Error;

/// Failure reported by a text-sentiment provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolarityError {
    /// Provider could not be reached or is not initialized
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Provider returned a value that is not a finite number
    #[error("provider returned non-finite polarity {0}")]
    NonFinite(f64),

    /// Provider-specific failure
    #[error("{0}")]
    Failed(String),
}

/// Single-method interface over a text-sentiment function
///
/// Implementations return a polarity conventionally bounded to [-1.0, 1.0],
/// +1.0 most positive. Shared across request handlers, hence `Send + Sync`.
pub trait PolarityProvider: Send + Sync {
    /// Signed polarity of `text`
    fn polarity(&self, text: &str) -> Result<f64, PolarityError>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
