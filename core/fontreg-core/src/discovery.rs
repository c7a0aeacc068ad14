//! Asset listing and entry-point lookup for fontreg-core

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::EntryPointPattern;

/// Names of the regular files directly inside `dir`, sorted so that runs are
/// reproducible regardless of directory order. Symlinks count as the file
/// they point to.
pub fn list_asset_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    let entries =
        fs::read_dir(dir).with_context(|| format!("listing font assets in {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing font assets in {}", dir.display()))?;
        let path = entry.path();
        let meta = fs::metadata(&path)
            .with_context(|| format!("reading metadata of {}", path.display()))?;
        if !meta.is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}

/// Why the entry point could not be pinned down to a single file.
#[derive(Debug, Error)]
pub enum EntryPointError {
    #[error("failed to search {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("no file matching `{pattern}` under {}", .root.display())]
    NotFound { pattern: String, root: PathBuf },
    #[error("{} files match `{pattern}`, expected exactly one: {}", .matches.len(), render_paths(.matches))]
    Ambiguous {
        pattern: String,
        matches: Vec<PathBuf>,
    },
}

fn render_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Recursive walk of the Java tree looking for the file that boots the app.
#[derive(Debug, Clone)]
pub struct EntryPointSearch {
    root: PathBuf,
    pattern: EntryPointPattern,
    follow_symlinks: bool,
}

impl EntryPointSearch {
    pub fn new(root: impl Into<PathBuf>, pattern: EntryPointPattern) -> Self {
        Self {
            root: root.into(),
            pattern,
            follow_symlinks: false,
        }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Every file under the root that matches the pattern, in walk order.
    pub fn candidates(&self) -> Result<Vec<PathBuf>, EntryPointError> {
        let mut found = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| EntryPointError::Walk {
                root: self.root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            if self.pattern.matches(relative) {
                found.push(entry.path().to_path_buf());
            }
        }

        Ok(found)
    }

    /// The single matching file. Zero or several matches are errors.
    pub fn locate(&self) -> Result<PathBuf, EntryPointError> {
        let mut found = self.candidates()?;
        match found.len() {
            0 => Err(EntryPointError::NotFound {
                pattern: self.pattern.as_str().to_string(),
                root: self.root.clone(),
            }),
            1 => Ok(found.remove(0)),
            _ => Err(EntryPointError::Ambiguous {
                pattern: self.pattern.as_str().to_string(),
                matches: found,
            }),
        }
    }
}
