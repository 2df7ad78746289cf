#![cfg(unix)]
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use lidbench::error::Error;
use lidbench::evaluation::{Evaluation, ExternalClassifier};
use lidbench::extract::HtmlText;
use lidbench::identifiers::{Detection, Detector};
use lidbench::labeling::{CutoffPolicy, Labeler, Thresholds};
use lidbench::lang::Lang;
use lidbench::store::DocumentStore;

/// Marker-driven oracle standing in for the real detector, so that the
/// ground truth of the test corpus is fixed and reproducible.
struct MarkerDetector;

impl Detector for MarkerDetector {
    fn detect(&self, text: &str) -> Result<Option<Detection>, Error> {
        let detection = if text.contains("english") {
            Some(Detection::new("en", 95.0))
        } else if text.contains("russian") {
            Some(Detection::new("ru", 60.0))
        } else {
            None
        };
        Ok(detection)
    }
}

fn write_doc(dir: &Path, name: &str, body: &str) {
    let html = format!("<html><body><h1>head</h1><p>{}</p></body></html>", body);
    fs::write(dir.join(name), html).unwrap();
}

/// Stand-in for the classifier under test: a script that prints a fixed
/// grouping for `<bin> languages <dir>`.
fn fake_classifier(dir: &Path, stdout: &str, exit_code: i32) -> PathBuf {
    let bin = dir.join("classifier.sh");
    let script = format!("#!/bin/sh\nprintf '%s' '{}'\nexit {}\n", stdout, exit_code);
    fs::write(&bin, script).unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

fn evaluation(bin: PathBuf) -> Evaluation<MarkerDetector, HtmlText> {
    let labeler = Labeler::new(
        MarkerDetector,
        HtmlText::new(),
        Thresholds::default(),
        CutoffPolicy::Above,
    );
    Evaluation::new(labeler, ExternalClassifier::new(bin))
}

#[test]
fn scores_against_gated_ground_truth() {
    let corpus_dir = tempfile::tempdir().unwrap();
    let bin_dir = tempfile::tempdir().unwrap();

    // ground truth: a and b are english, c has no text at all
    write_doc(corpus_dir.path(), "a.html", "english text number one");
    write_doc(corpus_dir.path(), "b.html", "english text number two");
    write_doc(corpus_dir.path(), "c.html", "");

    // the classifier gets a right, mislabels b, never returns c
    let bin = fake_classifier(
        bin_dir.path(),
        r#"[{"lang_code":"en","articles":["a.html"]},{"lang_code":"ru","articles":["b.html"]}]"#,
        0,
    );

    let reports = evaluation(bin)
        .run(&DocumentStore::new(corpus_dir.path()))
        .unwrap();

    let en = &reports[0];
    assert_eq!(en.lang, Lang::En);
    assert_eq!(en.matrix.true_positives(), 1); // a
    assert_eq!(en.matrix.false_negatives(), 1); // b
    assert_eq!(en.matrix.true_negatives(), 1); // c stays other on both sides
    assert_eq!(en.matrix.total(), 3);
    assert_eq!(en.matrix.precision(), Some(1.0));
    assert_eq!(en.matrix.recall(), Some(0.5));

    let ru = &reports[1];
    assert_eq!(ru.lang, Lang::Ru);
    assert_eq!(ru.matrix.false_positives(), 1); // b
    assert_eq!(ru.matrix.true_negatives(), 2);
    assert_eq!(ru.matrix.precision(), Some(0.0));
    // no document is truly russian, recall is undefined
    assert_eq!(ru.matrix.recall(), None);
}

#[test]
fn unknown_ids_in_classifier_output_are_ignored() {
    let corpus_dir = tempfile::tempdir().unwrap();
    let bin_dir = tempfile::tempdir().unwrap();

    write_doc(corpus_dir.path(), "a.html", "english text number one");

    let bin = fake_classifier(
        bin_dir.path(),
        r#"[{"lang_code":"en","articles":["a.html","ghost.html"]},{"lang_code":"ru","articles":[]}]"#,
        0,
    );

    let reports = evaluation(bin)
        .run(&DocumentStore::new(corpus_dir.path()))
        .unwrap();

    // ghost.html is dropped, a.html is still scored normally
    assert_eq!(reports[0].matrix.total(), 1);
    assert_eq!(reports[0].matrix.true_positives(), 1);
}

#[test]
fn classifier_failure_is_fatal() {
    let corpus_dir = tempfile::tempdir().unwrap();
    let bin_dir = tempfile::tempdir().unwrap();

    write_doc(corpus_dir.path(), "a.html", "english text number one");

    let bin = fake_classifier(bin_dir.path(), "[]", 1);
    let result = evaluation(bin).run(&DocumentStore::new(corpus_dir.path()));
    assert!(matches!(result, Err(Error::Classifier(_))));
}

#[test]
fn truncated_classifier_output_is_fatal() {
    let corpus_dir = tempfile::tempdir().unwrap();
    let bin_dir = tempfile::tempdir().unwrap();

    write_doc(corpus_dir.path(), "a.html", "english text number one");

    // one group instead of one per recognized language
    let bin = fake_classifier(
        bin_dir.path(),
        r#"[{"lang_code":"en","articles":[]}]"#,
        0,
    );
    let result = evaluation(bin).run(&DocumentStore::new(corpus_dir.path()));
    assert!(matches!(result, Err(Error::Classifier(_))));
}
