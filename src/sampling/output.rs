//! Staged replacement of the sampling destination.
//!
//! A sampling run replaces its destination wholesale. The replacement is
//! staged in a sibling directory and only swapped in on [StagedDir::commit],
//! so a run that dies halfway leaves the previous destination exactly as it
//! was instead of half-cleared.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

pub struct StagedDir {
    staging: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedDir {
    /// Create an empty staging directory next to `target`.
    ///
    /// A leftover staging directory from an earlier crashed run is
    /// discarded first.
    pub fn create(target: &Path) -> Result<Self, Error> {
        let name = target
            .file_name()
            .ok_or_else(|| Error::Custom(format!("invalid destination: {:?}", target)))?;

        let mut staging_name = name.to_os_string();
        staging_name.push(".staging");
        let staging = target.with_file_name(staging_name);

        if staging.exists() {
            debug!("discarding stale staging directory {:?}", staging);
            fs::remove_dir_all(&staging)?;
        }
        fs::create_dir_all(&staging)?;

        Ok(Self {
            staging,
            target: target.to_path_buf(),
            committed: false,
        })
    }

    /// Directory to populate during the run.
    pub fn path(&self) -> &Path {
        &self.staging
    }

    /// Replace the target with the staged contents.
    pub fn commit(mut self) -> Result<(), Error> {
        if self.target.exists() {
            fs::remove_dir_all(&self.target)?;
        }
        fs::rename(&self.staging, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedDir {
    fn drop(&mut self) {
        if !self.committed {
            debug!("discarding staging directory {:?}", self.staging);
            let _ = fs::remove_dir_all(&self.staging);
        }
    }
}
