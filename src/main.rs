//! # lidbench
//!
//! lidbench curates balanced, label-verified HTML corpora and scores a
//! language identification classifier against them.
//!
//! `sample` builds fixed-size `all`/per-language sample sets out of a raw
//! document pool, gating a detection oracle's guesses with per-language
//! confidence floors. `evaluate` runs an external classifier over a sample
//! set and reports per-language accuracy, precision and recall against the
//! same gated ground truth.
//!
//! ## Getting started
//!
//! ```sh
//! lidbench 0.1.0
//! corpus sampling and language identification evaluation tool.
//!
//! USAGE:
//!     lidbench <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     evaluate    Score an external classifier against ground truth
//!     help        Prints this message or the help of the given subcommand(s)
//!     sample      Build stratified per-language sample sets
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use lidbench::error::Error;
use lidbench::evaluation::{Evaluation, ExternalClassifier, LangReport};
use lidbench::extract::HtmlText;
use lidbench::identifiers::FastText;
use lidbench::labeling::{CutoffPolicy, Labeler, Thresholds};
use lidbench::sampling::{PlanReport, Sampler, SizePlan};
use lidbench::store::DocumentStore;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Lidbench::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lidbench::Sample(s) => {
            let detector = FastText::new(&s.lid_path, 1, 0.0)?;
            let labeler = Labeler::new(
                detector,
                HtmlText::new(),
                Thresholds::default(),
                CutoffPolicy::AtLeast,
            );
            let plans = s.sizes.iter().map(|size| SizePlan::new(*size)).collect();
            let sampler = Sampler::new(labeler, plans);

            let reports = sampler.sample(&DocumentStore::new(s.src), &s.dst)?;
            print_fill(&reports);
        }

        cli::Lidbench::Evaluate(e) => {
            let detector = FastText::new(&e.lid_path, 1, 0.0)?;
            let labeler = Labeler::new(
                detector,
                HtmlText::new(),
                Thresholds::default(),
                CutoffPolicy::Above,
            );
            let evaluation = Evaluation::new(labeler, ExternalClassifier::new(e.classifier));

            let reports = evaluation.run(&DocumentStore::new(e.corpus))?;
            print_scores(&reports);
        }
    };
    Ok(())
}

fn print_fill(reports: &[PlanReport]) {
    for report in reports {
        println!(
            "{}_all: {}/{}",
            report.tag,
            report.all.fill(),
            report.all.capacity()
        );
        for (lang, bucket) in &report.per_lang {
            println!(
                "{}_{}: {}/{}",
                report.tag,
                lang,
                bucket.fill(),
                bucket.capacity()
            );
        }
    }
}

fn print_scores(reports: &[LangReport]) {
    for report in reports {
        println!("\n{}:", report.lang);
        println!("\tAccuracy: {}", fmt_metric(report.matrix.accuracy()));
        println!("\tPrecision: {}", fmt_metric(report.matrix.precision()));
        println!("\tRecall: {}", fmt_metric(report.matrix.recall()));
    }
}

/// Undefined metrics (zero denominator) print as such instead of NaN.
fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6}", v),
        None => "undefined".to_string(),
    }
}
