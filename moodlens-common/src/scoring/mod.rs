//! Sentiment scoring
//!
//! Blends a text polarity from a [`PolarityProvider`] with the mean weight of
//! the emoji found in the input, then classifies the blend:
//!
//! - `final_score > 0.1` is Positive
//! - `final_score < -0.1` is Negative
//! - anything else (both boundaries included) is Neutral
//!
//! Scores keep full precision here; rounding happens where results are stored
//! or displayed.

pub mod emoji;
pub mod lexicon;
pub mod polarity;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::Result;

pub use emoji::{
    detect_mood, extract_emojis, score_emojis, EMOJI_MOOD, EMOJI_SENTIMENT, NEUTRAL_MOOD,
};
pub use lexicon::LexiconPolarity;
pub use polarity::{PolarityError, PolarityProvider};

/// Scores strictly above this are Positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this are Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Three-way classification of a blended score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl Category {
    /// Classify a blended score
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Category::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Category::Negative
        } else {
            Category::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Neutral => "Neutral",
        }
    }

    /// Face shown next to a result
    pub fn indicator(&self) -> &'static str {
        match self {
            Category::Positive => "😊",
            Category::Negative => "😞",
            Category::Neutral => "😐",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    /// Original input, unmodified
    pub input_text: String,
    /// Polarity reported by the text provider
    pub text_polarity: f64,
    /// Mean emoji weight, 0.0 when no weighted emoji is present
    pub emoji_polarity: f64,
    /// `(text_polarity + emoji_polarity) / 2`
    pub final_score: f64,
    pub category: Category,
    /// Mood of the first recognized emoji, or "Neutral"
    pub mood: &'static str,
}

impl SentimentResult {
    /// `"<Category> (<Mood>)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.category, self.mood)
    }
}

/// Stateless scorer over a shared polarity provider
#[derive(Clone)]
pub struct Scorer {
    provider: Arc<dyn PolarityProvider>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconPolarity::new()))
    }
}

impl Scorer {
    pub fn new(provider: Arc<dyn PolarityProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Score `text`
    ///
    /// Fails only when the polarity provider fails; a missing text half would
    /// corrupt the blend, so no default is substituted.
    pub fn analyze(&self, text: &str) -> Result<SentimentResult> {
        let text_polarity = self.provider.polarity(text)?;
        if !text_polarity.is_finite() {
            return Err(PolarityError::NonFinite(text_polarity).into());
        }

        let emojis = extract_emojis(text);
        let emoji_polarity = score_emojis(&emojis);
        let mood = detect_mood(&emojis);
        let final_score = (text_polarity + emoji_polarity) / 2.0;
        let category = Category::from_score(final_score);

        debug!(
            text_polarity,
            emoji_polarity,
            final_score,
            emoji_count = emojis.len(),
            "Scored input as {} ({})",
            category,
            mood
        );

        Ok(SentimentResult {
            input_text: text.to_string(),
            text_polarity,
            emoji_polarity,
            final_score,
            category,
            mood,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    /// Provider returning a fixed value
    struct FixedPolarity(f64);

    impl PolarityProvider for FixedPolarity {
        fn polarity(&self, _text: &str) -> std::result::Result<f64, PolarityError> {
            Ok(self.0)
        }
    }

    /// Provider that always fails
    struct DownProvider;

    impl PolarityProvider for DownProvider {
        fn polarity(&self, _text: &str) -> std::result::Result<f64, PolarityError> {
            Err(PolarityError::Unavailable("offline".to_string()))
        }
    }

    fn scorer(value: f64) -> Scorer {
        Scorer::new(Arc::new(FixedPolarity(value)))
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(Category::from_score(0.11), Category::Positive);
        assert_eq!(Category::from_score(1.0), Category::Positive);
        assert_eq!(Category::from_score(-0.11), Category::Negative);
        assert_eq!(Category::from_score(-1.0), Category::Negative);
        assert_eq!(Category::from_score(0.0), Category::Neutral);
    }

    #[test]
    fn test_category_boundaries_are_neutral() {
        assert_eq!(Category::from_score(0.1), Category::Neutral);
        assert_eq!(Category::from_score(-0.1), Category::Neutral);
    }

    #[test]
    fn test_indicator() {
        assert_eq!(Category::Positive.indicator(), "😊");
        assert_eq!(Category::Negative.indicator(), "😞");
        assert_eq!(Category::Neutral.indicator(), "😐");
    }

    #[test]
    fn test_analyze_worked_example() {
        let result = scorer(0.5).analyze("I love this! 😊👍").unwrap();

        assert_eq!(result.input_text, "I love this! 😊👍");
        assert_eq!(result.text_polarity, 0.5);
        assert!((result.emoji_polarity - 0.85).abs() < 1e-12);
        assert!((result.final_score - 0.675).abs() < 1e-12);
        assert_eq!(result.category, Category::Positive);
        assert_eq!(result.mood, "Happy");
        assert_eq!(result.label(), "Positive (Happy)");
    }

    #[test]
    fn test_analyze_empty_input() {
        let result = Scorer::default().analyze("").unwrap();

        assert_eq!(result.input_text, "");
        assert_eq!(result.text_polarity, 0.0);
        assert_eq!(result.emoji_polarity, 0.0);
        assert_eq!(result.final_score, 0.0);
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.mood, "Neutral");
        assert_eq!(result.label(), "Neutral (Neutral)");
    }

    #[test]
    fn test_final_score_is_exact_mean() {
        for (polarity, text) in [(0.3, "😢 😎"), (-0.7, "ok 👎"), (0.9, "nothing here")] {
            let result = scorer(polarity).analyze(text).unwrap();
            assert_eq!(
                result.final_score,
                (result.text_polarity + result.emoji_polarity) / 2.0
            );
            assert_eq!(result.category, Category::from_score(result.final_score));
        }
    }

    #[test]
    fn test_no_emoji_means_zero_and_neutral_mood() {
        let result = scorer(0.8).analyze("just words, no faces").unwrap();
        assert_eq!(result.emoji_polarity, 0.0);
        assert_eq!(result.mood, "Neutral");
        assert!((result.final_score - 0.4).abs() < 1e-12);
        assert_eq!(result.category, Category::Positive);
    }

    #[test]
    fn test_mood_is_order_sensitive() {
        assert_eq!(scorer(0.0).analyze("😢😊").unwrap().mood, "Sad");
        assert_eq!(scorer(0.0).analyze("😊😢").unwrap().mood, "Happy");
    }

    #[test]
    fn test_negative_blend() {
        let result = scorer(-0.4).analyze("ugh 😡").unwrap();
        assert!((result.final_score - (-0.7)).abs() < 1e-12);
        assert_eq!(result.category, Category::Negative);
        assert_eq!(result.label(), "Negative (Angry)");
    }

    #[test]
    fn test_provider_failure_propagates() {
        let scorer = Scorer::new(Arc::new(DownProvider));
        let err = scorer.analyze("hello 😊").unwrap_err();
        assert!(matches!(err, Error::Polarity(PolarityError::Unavailable(_))));
    }

    #[test]
    fn test_non_finite_polarity_rejected() {
        let err = scorer(f64::NAN).analyze("hello").unwrap_err();
        assert!(matches!(err, Error::Polarity(PolarityError::NonFinite(_))));
    }

    #[test]
    fn test_default_scorer_uses_lexicon() {
        let scorer = Scorer::default();
        assert_eq!(scorer.provider_name(), "lexicon");
        let result = scorer.analyze("What a great day 😄").unwrap();
        assert_eq!(result.category, Category::Positive);
        assert_eq!(result.mood, "Happy");
    }
}
