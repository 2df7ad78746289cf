//! Canonical text form for language detection.
//!
//! Detectors are sensitive to markup leftovers and punctuation runs, so
//! every text is reduced to letters, digits and single spaces before being
//! handed to the oracle.
use itertools::Itertools;

/// Reduce extracted plaintext to its canonical comparison form.
///
/// Characters that are neither alphanumeric nor whitespace are dropped,
/// then every maximal whitespace run (newlines included) collapses to a
/// single space. The result is idempotent:
/// `normalize(normalize(t)) == normalize(t)`.
///
/// An empty result means no ground truth is obtainable for the document;
/// callers skip it rather than treating it as an error.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("a\t b\n\nc"), "a b c");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("Привет, мир! (42)"), "Привет мир 42");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  leading and trailing  ",
            "uneventful text",
            "<p>tags &amp; entities</p>",
            "точка. запятая, тире — всё",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_only_alnum_and_single_spaces() {
        let out = normalize("a!!  b??\tc\n\nd");
        assert!(out
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' '));
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_degenerate_inputs_become_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("!?-–—…"), "");
    }
}
