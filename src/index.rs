//! Per-directory listing pages.
//!
//! Every directory below the repository root gets an `index.html` listing
//! its immediate subdirectories and files. The root itself is left alone,
//! since that is where the front page lives.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::templates::{Templates, DIRECTORY_INDEX_TEMPLATE};

pub const INDEX_FILENAME: &str = "index.html";
pub const MODIFIED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: String,
    pub date: String,
}

/// Contents of one directory, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    pub relative_path: String,
    pub show_parent: bool,
    pub directories: Vec<DirectoryEntry>,
    pub files: Vec<FileEntry>,
}

/// Human readable size, truncated: `512B`, `2K`, `5M`.
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{}B", size)
    } else if size < 1024 * 1024 {
        format!("{}K", size / 1024)
    } else {
        format!("{}M", size / (1024 * 1024))
    }
}

fn relative_path(root: &Path, directory: &Path) -> String {
    let rel = directory.strip_prefix(root).unwrap_or(directory);
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>();
    if parts.is_empty() {
        "/".to_string()
    } else {
        parts.join("/")
    }
}

/// List the immediate children of `directory`.
///
/// Entries are classified after following symlinks. An existing
/// `index.html` is never listed.
pub fn scan(root: &Path, directory: &Path) -> Result<DirectoryListing> {
    let relative_path = relative_path(root, directory);
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(directory).map_err(|e| Error::io(directory, e))? {
        let entry = entry.map_err(|e| Error::io(directory, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if metadata.is_dir() {
            directories.push(DirectoryEntry { name });
        } else if metadata.is_file() && name != INDEX_FILENAME {
            let modified: DateTime<Local> = metadata
                .modified()
                .map_err(|e| Error::io(&path, e))?
                .into();
            files.push(FileEntry {
                name,
                size: format_size(metadata.len()),
                date: modified.format(MODIFIED_DATE_FORMAT).to_string(),
            });
        }
    }

    directories.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(DirectoryListing {
        show_parent: relative_path != "/",
        relative_path,
        directories,
        files,
    })
}

impl DirectoryListing {
    pub fn render(&self, templates: &Templates) -> Result<String> {
        templates.render(DIRECTORY_INDEX_TEMPLATE, self)
    }
}

/// All directories strictly below `root`.
pub fn subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Write an `index.html` into every directory below `root`.
///
/// Returns the number of pages written. Pages written before a failure are
/// left in place.
pub fn write_indexes(root: &Path, templates: &Templates) -> Result<usize> {
    if !root.is_dir() {
        return Err(Error::MissingRepository(root.to_path_buf()));
    }

    let dirs = subdirectories(root)?;
    for dir in &dirs {
        let listing = scan(root, dir)?;
        let html = listing.render(templates)?;
        let index = dir.join(INDEX_FILENAME);
        fs::write(&index, html).map_err(|e| Error::io(&index, e))?;
        log::debug!("Wrote {}", index.display());
    }

    log::info!("Generated {} directory indexes", dirs.len());
    Ok(dirs.len())
}
