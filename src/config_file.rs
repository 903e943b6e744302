//! Case study files: the JSON description of a generated study that drives
//! `rmCases` generation from the command line.
//!
//! ```json
//! {
//!   "base_case": "cavityStudy",
//!   "cases": [["nu1e-5", "nu1e-6"], ["coarse", "fine"]],
//!   "write_dir": false
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FoamCaseError;

/// A generated case study, as recorded by the case generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyConfig {
    /// Directory holding the template (`baseCase/`) and the generated cases.
    pub base_case: PathBuf,
    /// Parent case names, then the child names of each further level.
    #[serde(default)]
    pub cases: Vec<Vec<String>>,
    /// Whether `base_case` is a copy that may be deleted as a whole.
    #[serde(default)]
    pub write_dir: bool,
}

impl CaseStudyConfig {
    pub fn new(base_case: impl Into<PathBuf>, cases: Vec<Vec<String>>, write_dir: bool) -> Self {
        Self {
            base_case: base_case.into(),
            cases,
            write_dir,
        }
    }

    /// Save the study to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize case study to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write case study to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a study from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read case study from {:?}", path.as_ref()))?;

        let config = Self::from_json(&content)
            .with_context(|| format!("Failed to parse case study {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Parse a study from JSON text.
    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate the study.
    ///
    /// Only the base path is checked. The shape of `cases` is taken as given:
    /// a wrongly nested list yields a wrong script, not an error.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.base_case.as_os_str().is_empty() {
            return Err(FoamCaseError::config("base_case must be specified"));
        }
        Ok(())
    }

    /// Parent case names (the first level of `cases`).
    pub fn parents(&self) -> &[String] {
        self.cases.first().map(Vec::as_slice).unwrap_or_default()
    }
}
