// src/naming.rs

use regex::Regex;
use std::sync::LazyLock;

static SECTION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*?) \(").unwrap());
static CHAPTER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)- (.*?) \(").unwrap());

/// Outcome of a pattern-based name transform.
///
/// Titles that do not match the expected pattern pass through unchanged, and
/// the caller can tell which branch fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Matched(String),
    Unmatched(String),
}

impl Normalized {
    pub fn into_inner(self) -> String {
        match self {
            Normalized::Matched(s) | Normalized::Unmatched(s) => s,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Normalized::Matched(_))
    }
}

/// Lowercase, underscore-joined form of a display title.
///
/// Splits on single spaces only. Consecutive spaces produce empty tokens and
/// therefore consecutive underscores in the output; that rough edge is kept
/// as-is so paths stay predictable from the raw title.
pub fn to_slug(name: &str) -> String {
    name.split(' ')
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Section titles look like `Getting Started (4 lectures)`. The part before
/// the first ` (` becomes the slug; anything else passes through unchanged.
pub fn normalize_section_name(name: &str) -> Normalized {
    match SECTION_NAME_RE.captures(name) {
        Some(caps) => Normalized::Matched(to_slug(&caps[1])),
        None => Normalized::Unmatched(name.to_string()),
    }
}

/// Chapter titles look like `3- Setting Up the IDE (4m)`. The leading number
/// is kept, the title becomes a slug, the trailing metadata is dropped.
pub fn normalize_chapter_name(name: &str) -> Normalized {
    match CHAPTER_NAME_RE.captures(name) {
        Some(caps) => Normalized::Matched(format!("{}_{}", &caps[1], to_slug(&caps[2]))),
        None => Normalized::Unmatched(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_slug_basic() {
        assert_eq!(to_slug("My First Course"), "my_first_course");
        assert_eq!(to_slug("already_slugged"), "already_slugged");
        assert_eq!(to_slug(""), "");
    }

    #[test]
    fn test_to_slug_is_idempotent() {
        let once = to_slug("Some Mixed CASE Title");
        assert_eq!(to_slug(&once), once);
    }

    #[test]
    fn test_to_slug_keeps_empty_segments() {
        // double space -> empty token -> double underscore, by contract
        assert_eq!(to_slug("a  b"), "a__b");
    }

    #[test]
    fn test_normalize_section_name_matched() {
        let result = normalize_section_name("Basics (10 lectures)");
        assert!(result.is_matched());
        assert_eq!(result.into_inner(), "basics");
    }

    #[test]
    fn test_normalize_section_name_takes_first_paren() {
        let result = normalize_section_name("Lists (and Tuples) (8 lectures)");
        assert!(result.is_matched());
        assert_eq!(result.into_inner(), "lists");
    }

    #[test]
    fn test_normalize_section_name_unmatched_is_identity() {
        let result = normalize_section_name("No Metadata Here");
        assert!(!result.is_matched());
        assert_eq!(result.into_inner(), "No Metadata Here");
    }

    #[test]
    fn test_normalize_chapter_name_matched() {
        let result = normalize_chapter_name("1- Intro (5m)");
        assert!(result.is_matched());
        assert_eq!(result.into_inner(), "1_intro");

        let result = normalize_chapter_name("12- Deep Dive Into Traits (18m)");
        assert_eq!(result.into_inner(), "12_deep_dive_into_traits");
    }

    #[test]
    fn test_normalize_chapter_name_unmatched_is_identity() {
        // no leading number
        let result = normalize_chapter_name("Intro (5m)");
        assert!(!result.is_matched());
        assert_eq!(result.into_inner(), "Intro (5m)");

        // no parenthetical metadata
        let result = normalize_chapter_name("3- Intro");
        assert!(!result.is_matched());
        assert_eq!(result.into_inner(), "3- Intro");
    }

    #[test]
    fn test_normalizers_never_fail_on_odd_input() {
        for input in ["", " ", "(", ") (", "42-", "🦀 (1m)"] {
            let _ = normalize_section_name(input).into_inner();
            let _ = normalize_chapter_name(input).into_inner();
        }
    }
}
