//! Distribution matrix configuration.
//!
//! The matrix is a YAML document with a `distributions` list; each entry
//! describes one release and the architectures built for it:
//!
//! ```yaml
//! distributions:
//!   - distro: ubuntu
//!     version: "18.04"
//!     codename: bionic
//!     architectures: [amd64, arm64]
//!     display_name: Ubuntu 18.04
//!     eol: "2023-05-31"
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::error::ConfigError;

/// Default location of the matrix, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "distros.yaml";

/// One release in the distribution matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSpec {
    pub distro: String,
    #[serde(deserialize_with = "deserialize_scalar")]
    pub version: String,
    /// Unique; names the directory under `pool/`.
    pub codename: String,
    pub architectures: Vec<String>,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionMatrix {
    pub distributions: Vec<DistributionSpec>,
}

/// Versions like `22.04` are often written unquoted.
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        String(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::String(s) => s,
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}

pub fn read_file(file_path: &Path) -> Result<DistributionMatrix, ConfigError> {
    let contents = std::fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    read_string(&contents)
}

pub fn read_string(contents: &str) -> Result<DistributionMatrix, ConfigError> {
    let matrix: DistributionMatrix = serde_yaml::from_str(contents)?;
    matrix.validate()?;
    Ok(matrix)
}

impl DistributionMatrix {
    pub fn get_distribution(&self, codename: &str) -> Option<&DistributionSpec> {
        self.distributions.iter().find(|d| d.codename == codename)
    }

    /// Union of all configured architectures, sorted.
    pub fn architectures(&self) -> Vec<String> {
        self.distributions
            .iter()
            .flat_map(|d| d.architectures.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for dist in &self.distributions {
            if dist.codename.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "distribution '{}' has an empty codename",
                    dist.display_name
                )));
            }
            if !seen.insert(dist.codename.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "codename '{}' is listed more than once",
                    dist.codename
                )));
            }
            if dist.architectures.is_empty() {
                return Err(ConfigError::invalid(format!(
                    "distribution '{}' has no architectures",
                    dist.codename
                )));
            }
        }
        Ok(())
    }
}
