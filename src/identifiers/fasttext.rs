//! Fasttext detection oracle
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};

use super::{Detection, Detector};
use crate::error::Error;

/// Clean the prediction label field from `__label__xx` into `xx`.
///
/// Be aware that the function only skips 9 chars without doing any parsing,
/// so it may silently fail if `prediction.label.chars().count() > 9`
/// but not of a `__label__xx` form.
///
/// # Errors
/// Returns an error if provided prediction is too short to be cleaned.
fn clean_prediction(prediction: &Prediction) -> Result<Prediction, String> {
    if prediction.label.chars().count() < 9 {
        return Err(format!(
            "Label is too short to be cleaned: {}",
            prediction.label
        ));
    }
    Ok(Prediction {
        prob: prediction.prob,
        label: prediction.label.chars().skip(9).collect(),
    })
}

/// Holds a [fasttext::FastText] instance and its parameters:
/// - [FastText::k], number of predicted languages on a text
/// - [FastText::threshold], prediction floor of the model itself
///
/// The floor defaults to `0.0` so that low-confidence guesses still reach
/// the threshold table instead of vanishing inside the model.
pub struct FastText {
    predictor: FastTextLib,
    pub k: i32,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext oracle with default parameters.
    ///
    /// **Having `lid.176.bin` at `.` is mandatory**
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] errors.
    pub fn new_lid() -> Result<Self, Error> {
        Self::new(Path::new("lid.176.bin"), 1, 0.0)
    }

    /// Create a new fasttext oracle.
    ///
    /// filename has to be a path to a `bin` file.
    ///
    /// See [fasttext::FastText::predict] for other parameters explanation
    pub fn new(filename: &Path, k: i32, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename_str = filename.to_str();
        match filename_str {
            None => Err(Error::Custom(format!(
                "invalid filepath for lid: {:?}",
                filename
            ))),
            Some(filename) => {
                predictor.load_model(filename)?;
                Ok(Self {
                    predictor,
                    k,
                    threshold,
                })
            }
        }
    }
}

impl Detector for FastText {
    /// Best-ranked prediction for the supplied text, rescaled from the
    /// model's `[0, 1]` probability to a `[0, 100]` confidence.
    fn detect(&self, text: &str) -> Result<Option<Detection>, Error> {
        let predictions = self
            .predictor
            .predict(text, self.k, self.threshold)
            .map_err(Error::FastText)?;

        match predictions.into_iter().next() {
            Some(prediction) => {
                let prediction = clean_prediction(&prediction).unwrap_or(prediction);
                Ok(Some(Detection::new(
                    prediction.label,
                    prediction.prob * 100.0,
                )))
            }
            None => Ok(None),
        }
    }
}
