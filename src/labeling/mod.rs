/*! Ground-truth labeling under confidence thresholds.

A [Labeler] wires the extraction seam, the text normalizer and a detection
oracle together, and gates the oracle's best guess against a per-language
confidence floor. The gate is the only place a document can earn a
recognized label: a locale absent from the threshold table never becomes
ground truth, whatever its confidence.
!*/
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;

use crate::extract::Extract;
use crate::identifiers::{Detection, Detector};
use crate::lang::{Label, Lang};
use crate::normalize::normalize;

lazy_static! {
    /// Default per-language confidence floors.
    static ref DEFAULT_THRESHOLDS: HashMap<Lang, f32> = {
        let mut m = HashMap::new();
        m.insert(Lang::En, 90.0);
        m.insert(Lang::Ru, 50.0);
        m
    };
}

/// Minimum-confidence table keyed by recognized language.
///
/// Supplied at construction time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Thresholds(HashMap<Lang, f32>);

impl Thresholds {
    pub fn get(&self, lang: Lang) -> Option<f32> {
        self.0.get(&lang).copied()
    }

    /// Replace the floor for one language.
    pub fn with(mut self, lang: Lang, floor: f32) -> Self {
        self.0.insert(lang, floor);
        self
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLDS.clone())
    }
}

/// How a confidence is compared against its floor.
///
/// Evaluation keeps a label only when the confidence is strictly above the
/// floor; sampling also accepts equality. The two comparisons are
/// deliberately kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffPolicy {
    /// strict `>`
    Above,
    /// `>=`
    AtLeast,
}

impl CutoffPolicy {
    pub fn accepts(&self, confidence: f32, floor: f32) -> bool {
        match self {
            CutoffPolicy::Above => confidence > floor,
            CutoffPolicy::AtLeast => confidence >= floor,
        }
    }
}

/// Assigns the authoritative label of a document.
///
/// Pure over its inputs, the threshold table and the cutoff policy.
pub struct Labeler<D, E> {
    detector: D,
    extractor: E,
    thresholds: Thresholds,
    policy: CutoffPolicy,
}

impl<D, E> Labeler<D, E>
where
    D: Detector,
    E: Extract,
{
    pub fn new(detector: D, extractor: E, thresholds: Thresholds, policy: CutoffPolicy) -> Self {
        Self {
            detector,
            extractor,
            thresholds,
            policy,
        }
    }

    /// Label raw document content.
    ///
    /// Returns `None` when no ground truth is obtainable for this
    /// document: empty text after extraction and normalization, or an
    /// extractor/oracle failure. Such documents are skipped, never
    /// aborting the surrounding pass.
    pub fn label(&self, name: &str, raw: &str) -> Option<Label> {
        let plaintext = match self.extractor.extract(raw) {
            Ok(text) => text,
            Err(e) => {
                warn!("[{}] extraction failed, skipping: {:?}", name, e);
                return None;
            }
        };

        let text = normalize(&plaintext);
        if text.is_empty() {
            return None;
        }

        match self.detector.detect(&text) {
            Ok(detection) => Some(self.gate(detection)),
            Err(e) => {
                warn!("[{}] detection failed, skipping: {:?}", name, e);
                None
            }
        }
    }

    /// Apply the threshold table to the oracle's best guess.
    fn gate(&self, detection: Option<Detection>) -> Label {
        let detection = match detection {
            Some(d) => d,
            None => return Label::Other,
        };

        let lang = match detection.locale().parse::<Lang>() {
            Ok(lang) => lang,
            Err(_) => return Label::Other,
        };

        match self.thresholds.get(lang) {
            Some(floor) if self.policy.accepts(detection.confidence(), floor) => Label::Lang(lang),
            _ => Label::Other,
        }
    }
}
