//! Input normalization policies.
//!
//! Every capability trims incoming text and applies its own minimum and
//! maximum length before the text reaches a provider. Truncation is a plain
//! prefix cut, not sentence-aware: entity offsets returned downstream are
//! relative to the truncated text, so the cut must stay a simple prefix.

/// Length limits applied to incoming text before inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    /// Inputs shorter than this (after trimming) short-circuit to a sentinel.
    pub min_chars: usize,
    /// Inputs longer than this are truncated to exactly this many characters.
    pub max_chars: Option<usize>,
}

/// Summarization requires at least 30 characters and caps input at 2000.
pub const SUMMARIZE: InputPolicy = InputPolicy {
    min_chars: 30,
    max_chars: Some(2000),
};

/// Entity extraction caps input at 1500 characters.
pub const EXTRACT_ENTITIES: InputPolicy = InputPolicy {
    min_chars: 0,
    max_chars: Some(1500),
};

/// Classification caps input at the encoder window of 512 characters.
pub const CLASSIFY: InputPolicy = InputPolicy {
    min_chars: 0,
    max_chars: Some(512),
};

/// Combined analysis caps input at 3000 characters.
pub const ANALYZE: InputPolicy = InputPolicy {
    min_chars: 0,
    max_chars: Some(3000),
};

/// Outcome of applying an [`InputPolicy`] to raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Trimmed text was empty.
    Empty,
    /// Trimmed text was non-empty but below the policy minimum.
    TooShort,
    /// Trimmed text, truncated to the policy maximum.
    Text(String),
}

impl InputPolicy {
    /// Trims and bounds raw text according to this policy.
    pub fn apply(&self, raw: &str) -> Normalized {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Normalized::Empty;
        }
        if trimmed.chars().count() < self.min_chars {
            return Normalized::TooShort;
        }

        let text = match self.max_chars {
            Some(max) => truncate_chars(trimmed, max),
            None => trimmed,
        };

        Normalized::Text(text.to_owned())
    }
}

/// Cuts `text` down to at most `max` characters.
///
/// The cut lands on a character boundary and may split a word or an entity
/// span.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_exact_prefix() {
        let text = "a".repeat(2500);
        let cut = truncate_chars(&text, 2000);

        assert_eq!(cut.chars().count(), 2000);
        assert!(text.starts_with(cut));
    }

    #[test]
    fn truncate_leaves_short_text_untouched() {
        assert_eq!(truncate_chars("short", 2000), "short");
        assert_eq!(truncate_chars("", 2000), "");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "äöü".repeat(300);
        let cut = truncate_chars(&text, 512);

        assert_eq!(cut.chars().count(), 512);
        assert!(cut.is_char_boundary(cut.len()));
    }

    #[test]
    fn summarize_policy_rejects_short_input() {
        assert_eq!(SUMMARIZE.apply("   "), Normalized::Empty);
        assert_eq!(SUMMARIZE.apply("too short to summarize"), Normalized::TooShort);
    }

    #[test]
    fn summarize_policy_trims_before_counting() {
        let text = format!("  {}  ", "b".repeat(30));
        match SUMMARIZE.apply(&text) {
            Normalized::Text(normalized) => assert_eq!(normalized, "b".repeat(30)),
            other => panic!("expected normalized text, got {other:?}"),
        }
    }

    #[test]
    fn policies_cap_at_documented_maximums() {
        let text = "x".repeat(5000);

        for (policy, max) in [
            (SUMMARIZE, 2000),
            (EXTRACT_ENTITIES, 1500),
            (CLASSIFY, 512),
            (ANALYZE, 3000),
        ] {
            match policy.apply(&text) {
                Normalized::Text(normalized) => assert_eq!(normalized.chars().count(), max),
                other => panic!("expected normalized text, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_minimum_policies_never_report_too_short() {
        assert_eq!(EXTRACT_ENTITIES.apply(""), Normalized::Empty);
        match EXTRACT_ENTITIES.apply("x") {
            Normalized::Text(text) => assert_eq!(text, "x"),
            other => panic!("expected normalized text, got {other:?}"),
        }
    }
}
