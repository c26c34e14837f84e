//! Expansion of the distribution matrix into CI job rows.

use serde::{Deserialize, Serialize};

use crate::config::DistributionMatrix;

/// A single (distribution, architecture) job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub distro: String,
    pub version: String,
    pub codename: String,
    pub arch: String,
    pub display_name: String,
}

/// The `{"include": [...]}` document CI fan-out expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub include: Vec<MatrixRow>,
}

/// One row per architecture of every distribution, in configuration order.
///
/// Architectures are not deduplicated.
pub fn expand(config: &DistributionMatrix) -> Matrix {
    let include = config
        .distributions
        .iter()
        .flat_map(|dist| {
            dist.architectures.iter().map(move |arch| MatrixRow {
                distro: dist.distro.clone(),
                version: dist.version.clone(),
                codename: dist.codename.clone(),
                arch: arch.clone(),
                display_name: dist.display_name.clone(),
            })
        })
        .collect();

    Matrix { include }
}

impl Matrix {
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
