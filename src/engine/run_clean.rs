//! `Allrun` / `Allclean` generation.
//!
//! Every directory below the base that directly holds a file ending in
//! `run` gets one backgrounded invocation line in each script. Unlike the
//! case locator this walk never prunes, so runnable directories nested inside
//! other runnable directories are collected as well.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::conventions::{ALLCLEAN, ALLRUN, RUN_SUFFIX, TEMPLATE_MARKER};
use crate::script::statement::join;
use crate::script::{write_script, Artifact, Script, ScriptKind, Statement};
use crate::walk::{walk_matching, DirListing, OnMatch};

const ALLRUN_HEADER: &str = "OpenFOAM Allrun script to run all cases generated by foamcase";
const ALLCLEAN_HEADER: &str = "OpenFOAM Allclean script to clean all cases generated by foamcase";

/// Whether a directory holds a run entry point and is not part of the template.
pub fn is_run_dir(listing: &DirListing) -> bool {
    listing.any_file(|name| name.ends_with(RUN_SUFFIX)) && !listing.path_contains(TEMPLATE_MARKER)
}

/// Every runnable directory below (and including) `base`, in walk order.
pub fn collect_run_dirs(base: &Path) -> crate::error::Result<Vec<PathBuf>> {
    walk_matching(base, OnMatch::Descend, is_run_dir)
}

/// Build a script invoking `script_name` in each directory, backgrounded.
pub fn invocation_script(header: &str, script_name: &str, dirs: &[PathBuf]) -> Script {
    let mut script = Script::new();
    script
        .push(Statement::Comment(header.to_string()))
        .push(Statement::Blank);
    for dir in dirs {
        script.push(Statement::InvokeBackground(join(dir, script_name)));
    }
    script
}

/// The `Allrun` and `Allclean` scripts for a set of runnable directories.
pub fn run_clean_scripts(dirs: &[PathBuf]) -> (Script, Script) {
    (
        invocation_script(ALLRUN_HEADER, ALLRUN, dirs),
        invocation_script(ALLCLEAN_HEADER, ALLCLEAN, dirs),
    )
}

/// Walk `base`, then write `Allrun` and `Allclean` into `out_dir`.
///
/// The returned artifacts carry the mode the scripts should be given; they
/// are not made executable here.
pub fn write_run_clean(base: &Path, out_dir: &Path) -> Result<Vec<Artifact>> {
    let dirs = collect_run_dirs(base)?;
    info!("{} runnable case(s) under {}", dirs.len(), base.display());

    let (allrun, allclean) = run_clean_scripts(&dirs);
    Ok(vec![
        write_script(out_dir, ScriptKind::Allrun, &allrun)?,
        write_script(out_dir, ScriptKind::Allclean, &allclean)?,
    ])
}
