//! Property-Based Tests for foamcase
//!
//! These tests verify:
//! - The case locator never reports a case nested inside another case
//! - Every reported case really has both marker directories
//! - Run/clean collection never reports template directories
//! - rmCases carries one removal line per parent case name

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use foamcase::{collect_run_dirs, find_cases, removal_script, Statement};

// =============================================================================
// Tree strategies
// =============================================================================

/// Relative directory paths built from a few names, `baseCase` included.
fn rel_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            Just("a"),
            Just("b"),
            Just("baseCase"),
            Just("0.1"),
            Just("constant"),
            Just("system"),
        ],
        1..4,
    )
    .prop_map(|parts| parts.iter().collect())
}

/// A tree description: directories, and which of them hold marker dirs or a run file.
fn tree_strategy() -> impl Strategy<Value = Vec<(PathBuf, bool, bool)>> {
    prop::collection::vec((rel_path_strategy(), any::<bool>(), any::<bool>()), 0..12)
}

fn materialize(root: &Path, tree: &[(PathBuf, bool, bool)]) {
    for (rel, is_case, runnable) in tree {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        if *is_case {
            fs::create_dir_all(dir.join("constant")).unwrap();
            fs::create_dir_all(dir.join("system")).unwrap();
        }
        if *runnable {
            fs::write(dir.join("Allrun"), "").unwrap();
        }
    }
}

fn rel(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap().to_path_buf()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// No reported case lies inside another reported case, and each is a real case.
    #[test]
    fn cases_are_disjoint_and_marked(tree in tree_strategy()) {
        let tmp = TempDir::new().unwrap();
        materialize(tmp.path(), &tree);

        let cases = find_cases(tmp.path()).unwrap();
        for (i, outer) in cases.iter().enumerate() {
            prop_assert!(outer.join("constant").is_dir());
            prop_assert!(outer.join("system").is_dir());
            prop_assert!(!rel(tmp.path(), outer).to_string_lossy().contains("baseCase"));
            for (j, inner) in cases.iter().enumerate() {
                if i != j {
                    prop_assert!(!inner.starts_with(outer));
                }
            }
        }
    }

    /// Every collected run directory holds a run file and is outside the template.
    #[test]
    fn run_dirs_are_runnable(tree in tree_strategy()) {
        let tmp = TempDir::new().unwrap();
        materialize(tmp.path(), &tree);

        let dirs = collect_run_dirs(tmp.path()).unwrap();
        for dir in &dirs {
            prop_assert!(dir.join("Allrun").is_file());
            prop_assert!(!rel(tmp.path(), dir).to_string_lossy().contains("baseCase"));
        }

        let expected = tree
            .iter()
            .filter(|(p, _, runnable)| *runnable && !p.to_string_lossy().contains("baseCase"))
            .map(|(p, _, _)| tmp.path().join(p))
            .collect::<std::collections::BTreeSet<_>>();
        let got = dirs.into_iter().collect::<std::collections::BTreeSet<_>>();
        prop_assert_eq!(got, expected);
    }
}

// =============================================================================
// rmCases
// =============================================================================

fn names_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z][a-z0-9_]{0,8}", 0..6), 0..4)
}

proptest! {
    /// One wildcard removal per parent name, in the given order.
    #[test]
    fn one_removal_per_parent(cases in names_strategy(), write_dir in any::<bool>()) {
        let script = removal_script(Path::new("study"), &cases, write_dir);

        let patterns: Vec<String> = script
            .statements
            .iter()
            .filter_map(|s| match s {
                Statement::RemoveTree(t) if t.ends_with('*') => Some(t.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<String> = cases
            .first()
            .map(|parents| parents.iter().map(|n| format!("study/{}*", n)).collect())
            .unwrap_or_default();
        prop_assert_eq!(patterns, expected);

        let prompts = script.count(|s| matches!(s, Statement::ConfirmRemove(_)));
        prop_assert_eq!(prompts, usize::from(write_dir));

        let last = script.statements.last().cloned();
        if write_dir {
            prop_assert_eq!(last, Some(Statement::RemoveTree("study".to_string())));
        } else {
            prop_assert_eq!(
                last,
                Some(Statement::RemoveFiles(vec![
                    "Allrun".to_string(),
                    "Allclean".to_string(),
                    "rmCases".to_string(),
                ]))
            );
        }
    }
}
