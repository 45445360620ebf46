//! Emoji extraction, weighting and mood lookup
//!
//! Both tables are immutable for the life of the process and shared across
//! requests without locking.
//!
//! Classification works on single code points. Multi-codepoint sequences
//! (flags, ZWJ families, skin-tone variants) are decomposed and every member
//! that is an emoji on its own is extracted independently.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Mood reported when no glyph matches [`EMOJI_MOOD`]
pub const NEUTRAL_MOOD: &str = "Neutral";

/// Emoji glyph to sentiment weight in [-1.0, 1.0]
pub static EMOJI_SENTIMENT: Lazy<HashMap<char, f64>> = Lazy::new(|| {
    HashMap::from([
        ('😊', 1.0),
        ('😄', 0.9),
        ('😁', 0.9),
        ('😂', 0.8),
        ('😍', 1.0),
        ('😢', -1.0),
        ('😭', -0.9),
        ('😞', -0.8),
        ('😡', -1.0),
        ('😠', -0.9),
        ('😐', 0.0),
        ('👍', 0.7),
        ('👎', -0.7),
        ('❤', 1.0),
        ('💔', -1.0),
        ('😃', 0.9),
        ('😉', 0.7),
        ('🤔', 0.0),
        ('😤', -0.6),
        ('😎', 0.8),
    ])
});

/// Emoji glyph to mood label
pub static EMOJI_MOOD: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('😊', "Happy"),
        ('😄', "Happy"),
        ('😁', "Happy"),
        ('😂', "Funny"),
        ('😍', "Romantic"),
        ('❤', "Romantic"),
        ('💔', "Heartbroken"),
        ('😢', "Sad"),
        ('😭', "Sad"),
        ('😞', "Sad"),
        ('😡', "Angry"),
        ('😠', "Angry"),
        ('😐', "Neutral"),
        ('🤔', "Confused"),
        ('😎', "Confident"),
        ('👍', "Supportive"),
        ('👎', "Disappointed"),
        ('😤', "Frustrated"),
    ])
});

/// Whether a single code point is an emoji on its own
///
/// Membership in the Unicode emoji set, plus every glyph the tables know about
/// (the unqualified ❤ has no variation selector but is still a table key).
pub fn is_emoji(ch: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(ch.encode_utf8(&mut buf)).is_some()
        || EMOJI_SENTIMENT.contains_key(&ch)
        || EMOJI_MOOD.contains_key(&ch)
}

/// Every emoji code point in `text`, in input order, duplicates kept
pub fn extract_emojis(text: &str) -> Vec<char> {
    text.chars().filter(|&ch| is_emoji(ch)).collect()
}

/// Mean weight of the glyphs found in [`EMOJI_SENTIMENT`]
///
/// Unknown glyphs are skipped. Returns exactly 0.0 when nothing matches.
pub fn score_emojis(glyphs: &[char]) -> f64 {
    let (total, count) = glyphs
        .iter()
        .filter_map(|glyph| EMOJI_SENTIMENT.get(glyph))
        .fold((0.0_f64, 0_usize), |(total, count), weight| {
            (total + weight, count + 1)
        });

    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Mood of the first glyph (left to right) found in [`EMOJI_MOOD`]
pub fn detect_mood(glyphs: &[char]) -> &'static str {
    glyphs
        .iter()
        .find_map(|glyph| EMOJI_MOOD.get(glyph).copied())
        .unwrap_or(NEUTRAL_MOOD)
}
