/*! Document store access.

Read side of the raw document pool and copy side of bucket output. The
pool is enumerated in lexicographic order so that order-sensitive passes
are reproducible across runs.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::error;

use crate::error::Error;

/// A pool of HTML documents rooted at a directory, read-only to the core.
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recursive `*.html` listing, lexicographically sorted.
    ///
    /// Sampling is first-N-that-qualify, not random, so a stable order is
    /// part of the contract. Unreadable entries are logged and skipped.
    pub fn list_recursive(&self) -> Result<Vec<PathBuf>, Error> {
        self.list_pattern("**/*.html")
    }

    /// Flat `*.html` listing, lexicographically sorted.
    pub fn list(&self) -> Result<Vec<PathBuf>, Error> {
        self.list_pattern("*.html")
    }

    fn list_pattern(&self, pattern: &str) -> Result<Vec<PathBuf>, Error> {
        let pattern = self.root.join(pattern);
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid store root: {:?}", self.root)))?;

        let paths = glob::glob(pattern)?
            .filter_map(|entry| {
                entry.map_or_else(
                    |e| {
                        error!("error reading pool entry: {}", e);
                        None
                    },
                    Some,
                )
            })
            .sorted()
            .collect();
        Ok(paths)
    }

    pub fn read(&self, path: &Path) -> Result<String, Error> {
        Ok(fs::read_to_string(path)?)
    }
}

/// Stable short identifier of a document: its final path component.
pub fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Copy a document into a bucket directory, creating the directory if it
/// did not exist.
pub fn copy_into(src: &Path, bucket_dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(bucket_dir)?;

    let dst = bucket_dir.join(short_name(src));
    fs::copy(src, dst)?;
    Ok(())
}
