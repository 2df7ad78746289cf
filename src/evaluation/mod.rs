/*! Classifier evaluation against ground-truth labels.

An evaluation run scores the external classifier's per-language grouping
of a corpus against the labeler's ground truth. Both label sides of every
document start at `other`: a document the classifier never returns keeps
its default predicted label, and a document without obtainable ground
truth keeps its default real label while still being scored.
!*/
mod classifier;
mod matrix;

pub use classifier::ExternalClassifier;
pub use classifier::LanguageGroup;
pub use matrix::ConfusionMatrix;

use std::collections::BTreeMap;

use log::{info, warn};

use crate::error::Error;
use crate::extract::Extract;
use crate::identifiers::Detector;
use crate::labeling::Labeler;
use crate::lang::{Label, Lang};
use crate::store::{self, DocumentStore};

/// Predicted and ground-truth labels of one document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair {
    pub predicted: Label,
    pub real: Label,
}

/// Scores of one recognized language after a run.
#[derive(Debug)]
pub struct LangReport {
    pub lang: Lang,
    pub matrix: ConfusionMatrix,
}

/// Scores an external classifier over a corpus directory.
pub struct Evaluation<D, E> {
    labeler: Labeler<D, E>,
    classifier: ExternalClassifier,
}

impl<D, E> Evaluation<D, E>
where
    D: Detector,
    E: Extract,
{
    pub fn new(labeler: Labeler<D, E>, classifier: ExternalClassifier) -> Self {
        Self {
            labeler,
            classifier,
        }
    }

    /// Run the classifier once over `corpus`, derive ground truth for every
    /// document, and score each recognized language.
    pub fn run(&self, corpus: &DocumentStore) -> Result<Vec<LangReport>, Error> {
        let paths = corpus.list()?;
        let mut pairs: BTreeMap<String, LabelPair> = paths
            .iter()
            .map(|path| (store::short_name(path), LabelPair::default()))
            .collect();
        info!("scoring {} documents", pairs.len());

        // predicted side: one-shot classifier run, groups in language order
        let groups = self.classifier.classify(corpus.root())?;
        for (lang, group) in Lang::ALL.iter().zip(groups) {
            for article in group.articles {
                match pairs.get_mut(&article) {
                    Some(pair) => pair.predicted = Label::Lang(*lang),
                    None => warn!("classifier returned unknown document {:?}", article),
                }
            }
        }

        // ground-truth side: skipped documents keep their default label
        for path in &paths {
            let raw = corpus.read(path)?;
            let name = store::short_name(path);
            if let Some(label) = self.labeler.label(&name, &raw) {
                if let Some(pair) = pairs.get_mut(&name) {
                    pair.real = label;
                }
            }
        }

        let pairs: Vec<LabelPair> = pairs.into_values().collect();
        Ok(score(&pairs))
    }
}

/// Populate one confusion matrix per recognized language.
pub fn score(pairs: &[LabelPair]) -> Vec<LangReport> {
    Lang::ALL
        .iter()
        .map(|lang| {
            let mut matrix = ConfusionMatrix::default();
            for pair in pairs {
                matrix.observe(*lang, pair.predicted, pair.real);
            }
            LangReport {
                lang: *lang,
                matrix,
            }
        })
        .collect()
}
