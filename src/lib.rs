//! # apt-pages
//!
//! Static browsing pages for an APT repository published as a static site.
//!
//! - [`matrix`] expands the distribution matrix into CI job rows.
//! - [`frontpage`] summarizes package counts per distribution.
//! - [`index`] writes a directory listing into every directory of the tree.
//!
//! The repository layout is `pool/<codename>/main/*.deb`; the codename is
//! the key into the distribution matrix (see [`config`]).

pub mod config;
pub mod error;
pub mod frontpage;
pub mod index;
pub mod logging;
pub mod matrix;
pub mod pool;
pub mod site;
pub mod templates;

pub use config::{DistributionMatrix, DistributionSpec};
pub use error::{ConfigError, Error, Result};
pub use frontpage::{write_frontpage, DistributionSummary, FrontPage};
pub use index::{format_size, scan, write_indexes, DirectoryListing};
pub use matrix::{expand, Matrix, MatrixRow};
pub use pool::{scan_pool, Pool, PoolEntry};
pub use site::SiteSettings;
pub use templates::Templates;
