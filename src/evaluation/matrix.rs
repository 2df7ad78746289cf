//! Per-language confusion counters and derived scores.
use crate::lang::{Label, Lang};

/// TP/TN/FP/FN counters for one language.
///
/// Every scored `(predicted, real)` pair lands in exactly one counter, so
/// the four always sum to the number of documents scored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    tp: u64,
    tn: u64,
    fp: u64,
    fn_: u64,
}

impl ConfusionMatrix {
    /// Count one `(predicted, real)` pair against `lang`.
    pub fn observe(&mut self, lang: Lang, predicted: Label, real: Label) {
        match (real.is(lang), predicted.is(lang)) {
            (true, true) => self.tp += 1,
            (false, false) => self.tn += 1,
            (false, true) => self.fp += 1,
            (true, false) => self.fn_ += 1,
        }
    }

    pub fn true_positives(&self) -> u64 {
        self.tp
    }

    pub fn true_negatives(&self) -> u64 {
        self.tn
    }

    pub fn false_positives(&self) -> u64 {
        self.fp
    }

    pub fn false_negatives(&self) -> u64 {
        self.fn_
    }

    /// Number of documents scored.
    pub fn total(&self) -> u64 {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// `(TP + TN) / total`. `None` when nothing was scored.
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.tp + self.tn, self.total())
    }

    /// `TP / (TP + FP)`. `None` when the language was never predicted.
    pub fn precision(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fp)
    }

    /// `TP / (TP + FN)`. `None` when no document truly is the language.
    pub fn recall(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fn_)
    }
}

/// A zero denominator makes the metric undefined, not a fault.
fn ratio(num: u64, denom: u64) -> Option<f64> {
    if denom == 0 {
        None
    } else {
        Some(num as f64 / denom as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe_all(matrix: &mut ConfusionMatrix, lang: Lang, pairs: &[(Label, Label)]) {
        for (predicted, real) in pairs {
            matrix.observe(lang, *predicted, *real);
        }
    }

    #[test]
    fn test_counters_partition_the_pairs() {
        let en = Label::Lang(Lang::En);
        let ru = Label::Lang(Lang::Ru);
        let other = Label::Other;

        let mut matrix = ConfusionMatrix::default();
        observe_all(
            &mut matrix,
            Lang::En,
            &[
                (en, en),       // TP
                (ru, en),       // FN
                (en, other),    // FP
                (other, other), // TN
                (ru, ru),       // TN for en
            ],
        );

        assert_eq!(matrix.true_positives(), 1);
        assert_eq!(matrix.false_negatives(), 1);
        assert_eq!(matrix.false_positives(), 1);
        assert_eq!(matrix.true_negatives(), 2);
        assert_eq!(matrix.total(), 5);
    }

    #[test]
    fn test_metrics_are_in_unit_range() {
        let en = Label::Lang(Lang::En);
        let mut matrix = ConfusionMatrix::default();
        observe_all(
            &mut matrix,
            Lang::En,
            &[(en, en), (en, Label::Other), (Label::Other, en)],
        );

        for metric in [matrix.accuracy(), matrix.precision(), matrix.recall()] {
            let value = metric.unwrap();
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_mixed_pairs() {
        // predicted = {A: en, B: ru}, real = {A: en, B: en}
        let en = Label::Lang(Lang::En);
        let ru = Label::Lang(Lang::Ru);

        let mut matrix = ConfusionMatrix::default();
        matrix.observe(Lang::En, en, en);
        matrix.observe(Lang::En, ru, en);

        assert_eq!(matrix.true_positives(), 1);
        assert_eq!(matrix.false_negatives(), 1);
        assert_eq!(matrix.accuracy(), Some(0.5));
        assert_eq!(matrix.precision(), Some(1.0));
        assert_eq!(matrix.recall(), Some(0.5));
    }

    #[test]
    fn test_degenerate_denominators_are_undefined() {
        let matrix = ConfusionMatrix::default();
        assert_eq!(matrix.accuracy(), None);
        assert_eq!(matrix.precision(), None);
        assert_eq!(matrix.recall(), None);

        // never predicted, never truly ru: precision and recall undefined
        let mut matrix = ConfusionMatrix::default();
        matrix.observe(Lang::Ru, Label::Lang(Lang::En), Label::Lang(Lang::En));
        assert_eq!(matrix.accuracy(), Some(1.0));
        assert_eq!(matrix.precision(), None);
        assert_eq!(matrix.recall(), None);
    }
}
