/*! Stratified corpus sampling.

For each size plan, two independent passes run over the same
lexicographically ordered pool:
1. the `all` bucket takes an unconditional prefix of the pool,
1. a second scan from the start labels every document and fills one bucket
   per recognized language, stopping as soon as every quota is met.

The per-language pass is first-N-that-qualify, not random sampling, which
is why pool order is part of the contract.
!*/
mod bucket;
mod output;

pub use bucket::Bucket;
pub use output::StagedDir;

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;
use crate::extract::Extract;
use crate::identifiers::Detector;
use crate::labeling::Labeler;
use crate::lang::{Label, Lang};
use crate::store::{self, DocumentStore};

/// One independent sampling run: a capacity and its directory tag.
///
/// A capacity of 1000 produces `1k_all`, `1k_en`, ... directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizePlan {
    pub tag: String,
    pub capacity: usize,
}

impl SizePlan {
    pub fn new(capacity: usize) -> Self {
        Self {
            tag: tag_for(capacity),
            capacity,
        }
    }
}

/// Directory tag for a capacity: round thousands abbreviate to `<n>k`.
fn tag_for(capacity: usize) -> String {
    if capacity >= 1000 && capacity % 1000 == 0 {
        format!("{}k", capacity / 1000)
    } else {
        capacity.to_string()
    }
}

/// Final fill state of one plan's buckets.
///
/// Fill counts below capacity mean the pool was exhausted before the
/// quotas were met; that is observable here, not an error.
#[derive(Debug)]
pub struct PlanReport {
    pub tag: String,
    pub all: Bucket,
    pub per_lang: Vec<(Lang, Bucket)>,
}

/// Fills bounded sample buckets from an ordered document pool.
pub struct Sampler<D, E> {
    labeler: Labeler<D, E>,
    plans: Vec<SizePlan>,
}

impl<D, E> Sampler<D, E>
where
    D: Detector,
    E: Extract,
{
    pub fn new(labeler: Labeler<D, E>, plans: Vec<SizePlan>) -> Self {
        Self { labeler, plans }
    }

    /// Run every size plan against `pool`, replacing `dst` on success.
    ///
    /// The destination is staged and only swapped in once every plan went
    /// through; on failure the previous destination stays untouched.
    pub fn sample(&self, pool: &DocumentStore, dst: &Path) -> Result<Vec<PlanReport>, Error> {
        let paths = pool.list_recursive()?;
        info!("pool has {} documents", paths.len());

        let staged = StagedDir::create(dst)?;
        let mut reports = Vec::with_capacity(self.plans.len());
        for plan in &self.plans {
            reports.push(self.run_plan(pool, &paths, staged.path(), plan)?);
        }
        staged.commit()?;

        Ok(reports)
    }

    fn run_plan(
        &self,
        pool: &DocumentStore,
        paths: &[PathBuf],
        out_root: &Path,
        plan: &SizePlan,
    ) -> Result<PlanReport, Error> {
        info!("[{}] sampling up to {} documents", plan.tag, plan.capacity);

        // bucket directories exist even when they end up empty
        let all_dir = out_root.join(format!("{}_all", plan.tag));
        std::fs::create_dir_all(&all_dir)?;
        let lang_dirs: Vec<(Lang, PathBuf)> = Lang::ALL
            .iter()
            .map(|lang| (*lang, out_root.join(format!("{}_{}", plan.tag, lang))))
            .collect();
        for (_, dir) in &lang_dirs {
            std::fs::create_dir_all(dir)?;
        }

        // first pass: unconditional pool prefix, no labeling involved
        let mut all = Bucket::new("all", plan.capacity);
        for path in paths.iter().take(plan.capacity) {
            store::copy_into(path, &all_dir)?;
            all.push(store::short_name(path));
        }
        if all.fill() < plan.capacity {
            warn!(
                "[{}] pool exhausted: all bucket holds {}/{}",
                plan.tag,
                all.fill(),
                plan.capacity
            );
        }

        // second pass: re-scan from the start, label, fill language quotas
        let mut buckets: Vec<(Lang, Bucket)> = Lang::ALL
            .iter()
            .map(|lang| (*lang, Bucket::new(lang.code(), plan.capacity)))
            .collect();

        for path in paths {
            if buckets.iter().all(|(_, bucket)| bucket.is_full()) {
                break;
            }

            let raw = pool.read(path)?;
            let name = store::short_name(path);

            if let Some(Label::Lang(lang)) = self.labeler.label(&name, &raw) {
                // buckets and lang_dirs are both built from Lang::ALL
                for ((bucket_lang, bucket), (_, dir)) in buckets.iter_mut().zip(&lang_dirs) {
                    if *bucket_lang == lang && !bucket.is_full() {
                        store::copy_into(path, dir)?;
                        bucket.push(name.clone());
                    }
                }
            }
        }

        for (lang, bucket) in &buckets {
            if bucket.is_full() {
                info!("[{}] {} bucket full at {}", plan.tag, lang, bucket.fill());
            } else {
                warn!(
                    "[{}] {} bucket underfilled: {}/{}",
                    plan.tag,
                    lang,
                    bucket.fill(),
                    plan.capacity
                );
            }
        }

        Ok(PlanReport {
            tag: plan.tag.clone(),
            all,
            per_lang: buckets,
        })
    }
}
