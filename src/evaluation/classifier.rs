//! One-shot driver for the classifier under test.
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use log::{info, warn};
use serde::Deserialize;

use crate::error::Error;
use crate::lang::Lang;

/// One per-language group of the classifier's output.
#[derive(Debug, Deserialize)]
pub struct LanguageGroup {
    pub lang_code: String,
    pub articles: Vec<String>,
}

/// External language classifier, invoked once per corpus directory.
///
/// The classifier is expected to print a JSON array with one
/// `{lang_code, articles}` group per recognized language, in
/// recognized-language order.
pub struct ExternalClassifier {
    bin: PathBuf,
}

impl ExternalClassifier {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Run `<bin> languages <corpus>` and parse the grouped output.
    ///
    /// Any failure of the process itself (spawn error, non-zero exit,
    /// unparseable or truncated output) is fatal to the evaluation run:
    /// no partial metrics are ever derived from a broken classifier.
    pub fn classify(&self, corpus: &Path) -> Result<Vec<LanguageGroup>, Error> {
        info!("running {:?} on {:?}", self.bin, corpus);
        let started = Instant::now();
        let output = Command::new(&self.bin)
            .arg("languages")
            .arg(corpus)
            .output()
            .map_err(|e| Error::Classifier(format!("could not run {:?}: {}", self.bin, e)))?;
        info!(
            "classifier ran for {:.1} seconds",
            started.elapsed().as_secs_f64()
        );

        if !output.status.success() {
            return Err(Error::Classifier(format!(
                "classifier exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let groups: Vec<LanguageGroup> = serde_json::from_slice(&output.stdout)?;
        check_groups(&groups)?;
        Ok(groups)
    }
}

/// Groups are consumed positionally; a count mismatch is fatal, a
/// `lang_code` disagreeing with its position is suspicious but trusted.
fn check_groups(groups: &[LanguageGroup]) -> Result<(), Error> {
    if groups.len() != Lang::ALL.len() {
        return Err(Error::Classifier(format!(
            "expected {} language groups, got {}",
            Lang::ALL.len(),
            groups.len()
        )));
    }

    for (lang, group) in Lang::ALL.iter().zip(groups) {
        if group.lang_code != lang.code() {
            warn!(
                "group at position of {} is tagged {:?}, trusting the position",
                lang, group.lang_code
            );
        }
    }
    Ok(())
}
