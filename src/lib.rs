//! foamcase library
//!
//! Helpers for OpenFOAM case studies: locating cases in a directory tree,
//! generating the `Allrun`, `Allclean` and `rmCases` scripts for a generated
//! study, and reading OpenFOAM dictionary files.

pub mod cli;
pub mod config_file;
pub mod conventions;
pub mod engine;
pub mod error;
pub mod foam_dict;
pub mod locator;
pub mod script;
pub mod walk;

// Re-export main types for convenience
pub use config_file::CaseStudyConfig;
pub use engine::remove::{removal_script, write_remove};
pub use engine::run_clean::{collect_run_dirs, run_clean_scripts, write_run_clean};
pub use error::{FoamCaseError, Result};
pub use foam_dict::{parse_dictionary, read_dictionary, write_dictionary, FoamDict, FoamValue};
pub use locator::find_cases;
pub use script::{apply_permissions, Artifact, Script, ScriptKind, Statement};
pub use walk::{walk_matching, DirListing, OnMatch};
