//! Detection oracle output and trait.
use crate::error::Error;

/// Best-guess locale for a text, with a confidence in `[0, 100]`.
///
/// Oracles may rank several guesses internally; only the best-ranked one
/// is ever surfaced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    locale: String,
    confidence: f32,
}

impl Detection {
    pub fn new(locale: impl Into<String>, confidence: f32) -> Self {
        Self {
            locale: locale.into(),
            confidence,
        }
    }

    /// Get a reference to the detection's locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get the detection's confidence.
    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// Ranked-first language detection over a text.
///
/// Implementations may return `Ok(None)` when no guess clears their own
/// internal floor; callers treat that like an unrecognized locale.
pub trait Detector {
    fn detect(&self, text: &str) -> Result<Option<Detection>, Error>;
}
