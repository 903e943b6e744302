//! `rmCases` generation.
//!
//! The removal script undoes a generated study: it deletes every generated
//! case, moves the template's contents back up into the base directory and
//! removes the generated scripts. When the base directory is itself a
//! generated copy, the script also offers to delete it.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::conventions::{ALLCLEAN, ALLRUN, RM_CASES, TEMPLATE_MARKER};
use crate::script::statement::{join, with_trailing_slash};
use crate::script::{write_script, Artifact, Script, ScriptKind, Statement};

const HEADER: &str = "Script to remove all cases and bring folder to original structure";

/// Build the removal script for `base`.
///
/// Only the first level of `cases` (the parent case names) is used; each name
/// becomes a prefix glob, so `case1` also removes `case10`. The shape of
/// `cases` is not checked.
///
/// With `write_dir` set, the confirmation loop is followed by one more
/// `rm -rf <base>` that runs whatever the answer was. That line is kept on
/// purpose until its intended behavior is confirmed.
pub fn removal_script<S: AsRef<str>>(base: &Path, cases: &[Vec<S>], write_dir: bool) -> Script {
    let mut script = Script::new();
    script.push(Statement::Comment(HEADER.to_string()));

    let parents = cases.first().map(Vec::as_slice).unwrap_or_default();
    for name in parents {
        script.push(Statement::RemoveTree(format!(
            "{}*",
            join(base, name.as_ref())
        )));
    }

    let template = base.join(TEMPLATE_MARKER);
    script
        .push(Statement::Blank)
        .push(Statement::Move {
            from: join(&template, "*"),
            to: with_trailing_slash(base),
        })
        .push(Statement::RemoveTree(template.display().to_string()))
        .push(Statement::RemoveFiles(vec![
            ALLRUN.to_string(),
            ALLCLEAN.to_string(),
            RM_CASES.to_string(),
        ]));

    if write_dir {
        let target = base.display().to_string();
        script
            .push(Statement::ConfirmRemove(target.clone()))
            .push(Statement::RemoveTree(target));
    }

    script
}

/// Build the removal script and write it into `out_dir`.
pub fn write_remove<S: AsRef<str>>(
    base: &Path,
    cases: &[Vec<S>],
    write_dir: bool,
    out_dir: &Path,
) -> Result<Artifact> {
    if cases.first().is_none_or(|parents| parents.is_empty()) {
        warn!("no parent case names given; {} will only restore the template", RM_CASES);
    }

    let script = removal_script(base, cases, write_dir);
    info!(
        "{} case pattern(s), write_dir={}",
        script.count(|s| matches!(s, Statement::RemoveTree(t) if t.ends_with('*'))),
        write_dir
    );
    write_script(out_dir, ScriptKind::RmCases, &script)
}
