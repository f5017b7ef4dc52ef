//! Source tree traversal.
//!
//! Yields the files the line scanner should read: excluded directories are
//! pruned before descending, only configured extensions are kept, and
//! minified or ignored files are skipped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Directories and symlinks to directories. Links are not followed, so a
/// linked directory is neither descended into nor scanned as a file.
fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Walks a root directory and produces scan targets.
///
/// The walker holds no state between walks: every call to [`targets`]
/// re-reads the filesystem.
///
/// [`targets`]: TreeWalker::targets
#[derive(Debug)]
pub struct TreeWalker {
    root: PathBuf,
    exclude_names: Vec<String>,
    exclude_paths: Vec<String>,
    extensions: Vec<String>,
    minified_marker: String,
    ignores: Vec<Pattern>,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        let (exclude_paths, exclude_names): (Vec<String>, Vec<String>) = config
            .exclude_dirs
            .iter()
            .map(|dir| dir.trim_start_matches("./").trim_end_matches('/').to_string())
            .partition(|dir| dir.contains('/'));

        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.into(),
            exclude_names,
            exclude_paths,
            extensions: config.extensions.clone(),
            minified_marker: config.minified_marker.clone(),
            ignores,
        })
    }

    /// Lazily walk the tree, yielding candidate file paths.
    ///
    /// Entries are visited in file-name order. A directory that cannot be
    /// read is yielded as an error; callers treat it as fatal.
    pub fn targets(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if is_dir_like(&entry) || !self.is_target(entry.path()) {
                        None
                    } else {
                        Some(Ok(entry.into_path()))
                    }
                }
                Err(err) => {
                    let path = err
                        .path()
                        .unwrap_or(self.root.as_path())
                        .display()
                        .to_string();
                    Some(Err(
                        anyhow::Error::new(err).context(format!("Failed to walk {}", path))
                    ))
                }
            })
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if self.exclude_names.iter().any(|n| *n == name) {
            return true;
        }

        let relative = self.relative_path(entry.path());
        self.exclude_paths.iter().any(|p| *p == relative)
    }

    fn is_target(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if !self.extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            return false;
        }

        if path.to_string_lossy().contains(&self.minified_marker) {
            return false;
        }

        let relative = self.relative_path(path);
        !self.ignores.iter().any(|p| p.matches(&relative))
    }

    /// Root-relative path with `/` separators.
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
