//! The repository front page.
//!
//! Package counts from the pool are joined against the distribution matrix
//! by codename. Codenames present in the pool but absent from the matrix
//! still get a row, with placeholder metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::{DistributionMatrix, DistributionSpec};
use crate::error::{Error, Result};
use crate::pool::{scan_pool, Pool};
use crate::site::SiteSettings;
use crate::templates::{Templates, FRONTPAGE_TEMPLATE};

pub const GENERATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Per-codename row on the front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSummary {
    pub codename: String,
    pub display_name: String,
    pub distro: String,
    pub version: String,
    pub eol: String,
    pub architectures: Vec<String>,
    pub package_count: usize,
}

impl DistributionSummary {
    pub fn from_spec(spec: &DistributionSpec, package_count: usize) -> Self {
        Self {
            codename: spec.codename.clone(),
            display_name: spec.display_name.clone(),
            distro: spec.distro.clone(),
            version: spec.version.clone(),
            eol: spec.eol.clone().unwrap_or_default(),
            architectures: spec.architectures.clone(),
            package_count,
        }
    }

    /// Placeholder row for a pool directory with no matrix entry.
    pub fn unmatched(codename: &str, package_count: usize) -> Self {
        Self {
            codename: codename.to_string(),
            display_name: title_case(codename),
            distro: "unknown".to_string(),
            version: String::new(),
            eol: String::new(),
            architectures: Vec::new(),
            package_count,
        }
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Everything the front-page template sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontPage {
    pub repo_owner: String,
    pub repo_name: String,
    pub pages_url: String,
    pub package_count: usize,
    /// Sorted by codename.
    pub distributions: Vec<DistributionSummary>,
    /// Every configured architecture, sorted, whether or not it has packages.
    pub architectures: Vec<String>,
    pub generated_date: String,
}

impl FrontPage {
    pub fn build(
        config: &DistributionMatrix,
        pool: &Pool,
        site: &SiteSettings,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let specs = config
            .distributions
            .iter()
            .map(|spec| (spec.codename.as_str(), spec))
            .collect::<HashMap<_, _>>();

        let distributions = pool
            .distributions
            .iter()
            .map(|(codename, entries)| match specs.get(codename.as_str()) {
                Some(spec) => DistributionSummary::from_spec(spec, entries.len()),
                None => {
                    log::warn!(
                        "Pool directory '{}' has no matching distribution, using defaults",
                        codename
                    );
                    DistributionSummary::unmatched(codename, entries.len())
                }
            })
            .collect::<Vec<_>>();

        Self {
            repo_owner: site.repo_owner.clone(),
            repo_name: site.repo_name.clone(),
            pages_url: site.pages_url.clone(),
            package_count: pool.total_package_count(),
            distributions,
            architectures: config.architectures(),
            generated_date: generated_at.format(GENERATED_DATE_FORMAT).to_string(),
        }
    }

    pub fn render(&self, templates: &Templates) -> Result<String> {
        templates.render(FRONTPAGE_TEMPLATE, self)
    }
}

/// Scan `repo_root`, render the front page and write it to `output`.
pub fn write_frontpage(
    repo_root: &Path,
    output: &Path,
    config: &DistributionMatrix,
    site: &SiteSettings,
    templates: &Templates,
    generated_at: DateTime<Utc>,
) -> Result<FrontPage> {
    let pool = scan_pool(repo_root)?;
    let page = FrontPage::build(config, &pool, site, generated_at);
    let html = page.render(templates)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(output, html).map_err(|e| Error::io(output, e))?;

    log::info!(
        "Front page with {} packages across {} distributions written to {}",
        page.package_count,
        page.distributions.len(),
        output.display()
    );
    Ok(page)
}
