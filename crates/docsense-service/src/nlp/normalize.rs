//! Result normalization from raw provider output.
//!
//! Scores are clamped to `[0, 1]`, offsets coerced to non-negative values,
//! and missing fields default to empty or zero instead of failing the
//! request.

use super::policy;
use super::raw::{RawAnswer, RawEntity, RawLabel, RawSummary};
use super::response::{Answer, Classification, Entity, Summary};

/// Number of characters of the normalized input echoed as the clause.
const CLAUSE_CHARS: usize = 100;

/// Normalizes a raw summarization result.
pub fn summary(raw: RawSummary) -> Summary {
    Summary::new(raw.summary_text.unwrap_or_default())
}

/// Normalizes one raw entity span.
pub fn entity(raw: RawEntity) -> Entity {
    let start = raw.start.unwrap_or(0).max(0) as usize;
    let end = raw.end.unwrap_or(0).max(0) as usize;

    Entity {
        entity_group: raw.entity_group.unwrap_or_default(),
        score: clamp_score(raw.score),
        word: raw.word.unwrap_or_default(),
        start,
        end: end.max(start),
    }
}

/// Normalizes raw entity spans, preserving document order.
pub fn entities(raw: Vec<RawEntity>) -> Vec<Entity> {
    raw.into_iter().map(entity).collect()
}

/// Normalizes raw classification labels.
///
/// The clause is the first 100 characters of `normalized_text` and is the
/// same for every entry of one response.
pub fn classifications(raw: Vec<RawLabel>, normalized_text: &str) -> Vec<Classification> {
    let clause = policy::truncate_chars(normalized_text, CLAUSE_CHARS);

    raw.into_iter()
        .map(|raw_label| Classification {
            clause: clause.to_owned(),
            risk_level: title_case(&raw_label.label.unwrap_or_default()),
            score: clamp_score(raw_label.score),
        })
        .collect()
}

/// Normalizes a raw question-answering result.
pub fn answer(raw: RawAnswer) -> Answer {
    Answer::new(raw.answer.unwrap_or_default())
}

fn clamp_score(score: Option<f64>) -> f32 {
    score.unwrap_or(0.0).clamp(0.0, 1.0) as f32
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A letter starts a word when the preceding character is not alphabetic,
/// so `"very_happy"` becomes `"Very_Happy"`.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;

    for ch in label.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
