//! # General-purpose sentiment lexicon
//!
//! Rule-based polarity provider: word scores averaged over the matched words,
//! scaled by a preceding intensifier and dampened/flipped by a preceding negation.

use std::collections::HashMap;

use super::polarity::{PolarityError, PolarityProvider};

/// Multiplier applied to a sentiment word that follows a negation
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-backed [`PolarityProvider`]
pub struct LexiconPolarity {
    /// Word to polarity mapping
    words: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// Intensifier words and their multipliers
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconPolarity {
    /// Create a lexicon with the built-in English word list
    pub fn new() -> Self {
        let positive_words = vec![
            ("love", 0.5),
            ("loved", 0.7),
            ("lovely", 0.5),
            ("like", 0.2),
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("wonderful", 1.0),
            ("fantastic", 0.4),
            ("perfect", 1.0),
            ("best", 1.0),
            ("better", 0.5),
            ("happy", 0.8),
            ("glad", 0.5),
            ("joy", 0.8),
            ("fun", 0.3),
            ("funny", 0.25),
            ("nice", 0.6),
            ("beautiful", 0.85),
            ("brilliant", 0.9),
            ("pleasant", 0.73),
            ("enjoy", 0.4),
            ("enjoyed", 0.4),
            ("cool", 0.35),
            ("fine", 0.42),
            ("favorite", 0.5),
            ("exciting", 0.3),
            ("excited", 0.38),
            ("thanks", 0.2),
            ("thank", 0.2),
            ("calm", 0.3),
            ("proud", 0.8),
            ("success", 0.3),
            ("win", 0.8),
            ("positive", 0.23),
        ];

        let negative_words = vec![
            ("hate", -0.8),
            ("hated", -0.9),
            ("bad", -0.7),
            ("worse", -0.4),
            ("worst", -1.0),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("sad", -0.5),
            ("unhappy", -0.6),
            ("angry", -0.5),
            ("mad", -0.625),
            ("annoying", -0.8),
            ("annoyed", -0.4),
            ("boring", -1.0),
            ("poor", -0.4),
            ("ugly", -0.7),
            ("wrong", -0.5),
            ("disappointed", -0.75),
            ("disappointing", -0.6),
            ("upset", -0.3),
            ("hurt", -0.4),
            ("pain", -0.3),
            ("cry", -0.3),
            ("stupid", -0.8),
            ("useless", -0.5),
            ("broken", -0.4),
            ("fail", -0.5),
            ("failed", -0.5),
            ("lonely", -0.5),
            ("scared", -0.6),
            ("afraid", -0.6),
            ("tired", -0.4),
            ("negative", -0.3),
            ("problem", -0.3),
        ];

        let words = positive_words
            .into_iter()
            .chain(negative_words)
            .map(|(word, score)| (word.to_string(), score))
            .collect();

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "none",
            "cannot", "cant", "can't", "don't", "dont", "doesn't", "doesnt",
            "didn't", "didnt", "won't", "wont", "isn't", "isnt", "aren't",
            "arent", "wasn't", "wasnt", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("so", 1.3),
            ("extremely", 1.5),
            ("incredibly", 1.5),
            ("super", 1.4),
            ("totally", 1.3),
            ("absolutely", 1.5),
            ("slightly", 0.5),
            ("somewhat", 0.7),
            ("kinda", 0.7),
        ]
        .into_iter()
        .map(|(word, mult)| (word.to_string(), mult))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get polarity for a single word
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get intensifier multiplier
    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    #[cfg(test)]
    fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score);
    }

    /// Score `text`
    ///
    /// Mean of matched word scores clamped to [-1.0, 1.0]; 0.0 when no word matches.
    pub fn score(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();
        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for raw in text.split_whitespace() {
            let word = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            if self.is_negation(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.get_intensifier(&word) {
                intensifier = mult;
                continue;
            }

            if let Some(mut score) = self.get_score(&word) {
                if negate_next {
                    score *= NEGATION_FACTOR;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;
                scores.push(score);
            } else {
                negate_next = false;
                intensifier = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl PolarityProvider for LexiconPolarity {
    fn polarity(&self, text: &str) -> Result<f64, PolarityError> {
        Ok(self.score(text))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero() {
        let lexicon = LexiconPolarity::new();
        assert_eq!(lexicon.score(""), 0.0);
        assert_eq!(lexicon.score("   "), 0.0);
    }

    #[test]
    fn test_no_sentiment_words_is_zero() {
        let lexicon = LexiconPolarity::new();
        assert_eq!(lexicon.score("the train leaves at noon"), 0.0);
    }

    #[test]
    fn test_positive_text() {
        let lexicon = LexiconPolarity::new();
        assert!(lexicon.score("I love this!") > 0.0);
        assert!(lexicon.score("What a great, wonderful day") > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let lexicon = LexiconPolarity::new();
        assert!(lexicon.score("This is terrible.") < 0.0);
        assert!(lexicon.score("I hate Mondays") < 0.0);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let lexicon = LexiconPolarity::new();
        assert_eq!(lexicon.score("good!!!"), lexicon.score("good"));
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let lexicon = LexiconPolarity::new();
        let plain = lexicon.score("good");
        let negated = lexicon.score("not good");
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn test_intensifier_scales() {
        let lexicon = LexiconPolarity::new();
        assert!(lexicon.score("very good") > lexicon.score("good"));
        assert!(lexicon.score("slightly good") < lexicon.score("good"));
    }

    #[test]
    fn test_clamped_to_unit_range() {
        let lexicon = LexiconPolarity::new();
        let score = lexicon.score("absolutely perfect");
        assert_eq!(score, 1.0);
        let score = lexicon.score("extremely terrible");
        assert_eq!(score, -1.0);
    }

    #[test]
    fn test_custom_word() {
        let mut lexicon = LexiconPolarity::new();
        assert_eq!(lexicon.score("rustacean"), 0.0);
        lexicon.add_word("Rustacean", 0.9);
        assert_eq!(lexicon.score("rustacean"), 0.9);
    }

    #[test]
    fn test_provider_never_fails() {
        let lexicon = LexiconPolarity::new();
        assert!(lexicon.polarity("anything at all").is_ok());
        assert_eq!(lexicon.name(), "lexicon");
    }
}
