//! Directory traversal shared by the case locator and the run/clean collector.
//!
//! A single depth-first, pre-order walk parameterized by a match predicate
//! and what to do once a directory matches: stop descending (`Prune`) or keep
//! going (`Descend`).
//!
//! # Ordering
//!
//! Entries of each directory are visited in byte-wise file name order, so the
//! result is deterministic for a given filesystem state.
//!
//! # Symlinks
//!
//! A symlink pointing at a directory is listed as a directory (so it counts
//! toward marker checks) but is never descended into.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// What the walk does after a directory matches the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMatch {
    /// Record the directory and do not visit anything below it.
    Prune,
    /// Record the directory and keep walking into its children.
    Descend,
}

/// The direct contents of one visited directory.
#[derive(Debug, Clone)]
pub struct DirListing {
    /// Path of the visited directory, as built from the walk root.
    pub path: PathBuf,
    /// Names of subdirectories (including symlinks to directories).
    pub dirs: Vec<String>,
    /// Names of every other entry.
    pub files: Vec<String>,
    /// Subdirectories the walk may descend into.
    children: Vec<PathBuf>,
}

impl DirListing {
    /// List the direct contents of `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let mut entries = fs::read_dir(path)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut listing = Self {
            path: path.to_path_buf(),
            dirs: Vec::new(),
            files: Vec::new(),
            children: Vec::new(),
        };

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                listing.dirs.push(name);
                listing.children.push(entry.path());
            } else if file_type.is_symlink() && entry.path().is_dir() {
                listing.dirs.push(name);
            } else {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }

    /// Whether a subdirectory called `name` exists directly in this directory.
    pub fn has_dir(&self, name: &str) -> bool {
        self.dirs.iter().any(|d| d == name)
    }

    /// Whether any non-directory entry name satisfies `pred`.
    pub fn any_file(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.files.iter().any(|f| pred(f))
    }

    /// Whether the directory path, as a string, contains `marker`.
    pub fn path_contains(&self, marker: &str) -> bool {
        self.path.to_string_lossy().contains(marker)
    }
}

/// Walk `root` depth-first and return every directory satisfying `is_match`,
/// in visiting order.
///
/// The root itself is visited first and can match. Errors reading any
/// directory abort the walk.
pub fn walk_matching<F>(root: &Path, on_match: OnMatch, mut is_match: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&DirListing) -> bool,
{
    let mut found = Vec::new();
    visit(root, on_match, &mut is_match, &mut found)?;
    Ok(found)
}

fn visit<F>(dir: &Path, on_match: OnMatch, is_match: &mut F, found: &mut Vec<PathBuf>) -> Result<()>
where
    F: FnMut(&DirListing) -> bool,
{
    let listing = DirListing::read(dir)?;

    if is_match(&listing) {
        debug!("match: {}", listing.path.display());
        found.push(listing.path.clone());
        if on_match == OnMatch::Prune {
            return Ok(());
        }
    }

    for child in &listing.children {
        visit(child, on_match, is_match, found)?;
    }
    Ok(())
}
