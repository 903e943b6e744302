//! Case locator.
//!
//! A directory is an OpenFOAM case when it directly contains both a
//! `constant` and a `system` subdirectory. The walk stops at a case so time
//! step directories and other case internals are never reported as cases of
//! their own.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::conventions::{CONSTANT_DIR, SYSTEM_DIR, TEMPLATE_MARKER};
use crate::error::Result;
use crate::walk::{walk_matching, DirListing, OnMatch};

/// Whether a directory listing looks like an OpenFOAM case root.
pub fn is_case(listing: &DirListing) -> bool {
    listing.has_dir(CONSTANT_DIR) && listing.has_dir(SYSTEM_DIR)
}

/// List every case below (and including) `root`.
///
/// The template case is still recognized as a case, which stops the walk
/// from descending into it, but it is left out of the result.
pub fn find_cases(root: &Path) -> Result<Vec<PathBuf>> {
    let cases: Vec<PathBuf> = walk_matching(root, OnMatch::Prune, is_case)?
        .into_iter()
        .filter(|path| {
            let template = path.to_string_lossy().contains(TEMPLATE_MARKER);
            if template {
                debug!("skipping template case {}", path.display());
            }
            !template
        })
        .collect();

    info!("found {} case(s) under {}", cases.len(), root.display());
    Ok(cases)
}
