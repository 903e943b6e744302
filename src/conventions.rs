//! Filesystem conventions shared by the locator and the script generators.
//!
//! These names are part of the OpenFOAM case layout contract and are not
//! configurable.

/// Subdirectory holding physical properties and the mesh.
pub const CONSTANT_DIR: &str = "constant";

/// Subdirectory holding solver settings (`controlDict`, `fvSchemes`, ...).
pub const SYSTEM_DIR: &str = "system";

/// Name of the template case the study was generated from.
///
/// Any path containing this string is excluded from discovery.
pub const TEMPLATE_MARKER: &str = "baseCase";

/// File name suffix that marks a directory as runnable (`Allrun`, `run`, ...).
pub const RUN_SUFFIX: &str = "run";

/// Script invoked in each case directory by the generated `Allrun`.
pub const ALLRUN: &str = "Allrun";

/// Script invoked in each case directory by the generated `Allclean`.
pub const ALLCLEAN: &str = "Allclean";

/// Name of the generated removal script.
pub const RM_CASES: &str = "rmCases";

/// Permission bits generated scripts should carry.
pub const SCRIPT_MODE: u32 = 0o755;
