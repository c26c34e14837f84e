//! Scanning of the package pool.
//!
//! Packages live under `pool/<codename>/main/*.deb`.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A package artifact found in the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Snapshot of the pool, keyed by codename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    pub distributions: BTreeMap<String, Vec<PoolEntry>>,
}

impl Pool {
    pub fn package_count(&self, codename: &str) -> usize {
        self.distributions.get(codename).map_or(0, Vec::len)
    }

    pub fn total_package_count(&self) -> usize {
        self.distributions.values().map(Vec::len).sum()
    }

    pub fn codenames(&self) -> impl Iterator<Item = &str> {
        self.distributions.keys().map(String::as_str)
    }
}

/// Scan `<repo_root>/pool`.
///
/// A missing pool is an empty repository, not an error. Codename
/// directories without a `main/` component are skipped.
pub fn scan_pool(repo_root: &Path) -> Result<Pool> {
    let pool_dir = repo_root.join("pool");
    let mut pool = Pool::default();

    if !pool_dir.is_dir() {
        log::debug!("No pool at {}, assuming empty repository", pool_dir.display());
        return Ok(pool);
    }

    for entry in fs::read_dir(&pool_dir).map_err(|e| Error::io(&pool_dir, e))? {
        let entry = entry.map_err(|e| Error::io(&pool_dir, e))?;
        let dist_dir = entry.path();
        if !dist_dir.is_dir() {
            continue;
        }
        let main_dir = dist_dir.join("main");
        if !main_dir.is_dir() {
            log::debug!("Skipping {}: no main component", dist_dir.display());
            continue;
        }
        let codename = entry.file_name().to_string_lossy().into_owned();
        let packages = scan_component(&main_dir)?;
        log::debug!("Found {} packages for {}", packages.len(), codename);
        pool.distributions.insert(codename, packages);
    }

    Ok(pool)
}

fn scan_component(dir: &Path) -> Result<Vec<PoolEntry>> {
    let mut packages = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !filename.ends_with(".deb") {
            continue;
        }
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(|e| Error::io(&path, e))?;
        packages.push(PoolEntry {
            filename,
            size: metadata.len(),
            modified: modified.into(),
        });
    }
    packages.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(packages)
}
