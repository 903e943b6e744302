//! Writing scripts to disk.
//!
//! Writing and permission changes are separate steps: [`write_script`]
//! returns an [`Artifact`] carrying the intended mode, and
//! [`apply_permissions`] applies it when the caller asks for that.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::info;

use super::Script;
use crate::conventions::SCRIPT_MODE;

/// The scripts foamcase generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ScriptKind {
    #[strum(serialize = "Allrun")]
    Allrun,
    #[strum(serialize = "Allclean")]
    Allclean,
    #[strum(serialize = "rmCases")]
    RmCases,
}

impl ScriptKind {
    /// File name the script is written under.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Allrun => crate::conventions::ALLRUN,
            Self::Allclean => crate::conventions::ALLCLEAN,
            Self::RmCases => crate::conventions::RM_CASES,
        }
    }
}

/// A script written to disk, with the permission bits it should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ScriptKind,
    pub path: PathBuf,
    pub mode: u32,
}

/// Write `script` into `out_dir` under its conventional name.
///
/// An existing file of the same name is overwritten. Permissions are left
/// as the platform creates them; see [`apply_permissions`].
pub fn write_script(out_dir: &Path, kind: ScriptKind, script: &Script) -> Result<Artifact> {
    let path = out_dir.join(kind.file_name());
    fs::write(&path, script.render())
        .with_context(|| format!("Failed to write {} to {:?}", kind, path))?;
    info!("wrote {} ({} statements)", path.display(), script.statements.len());

    Ok(Artifact {
        kind,
        path,
        mode: SCRIPT_MODE,
    })
}

/// Apply each artifact's intended mode.
pub fn apply_permissions(artifacts: &[Artifact]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        for artifact in artifacts {
            let mut perms = fs::metadata(&artifact.path)
                .with_context(|| format!("Failed to inspect {:?}", artifact.path))?
                .permissions();
            perms.set_mode(artifact.mode);
            fs::set_permissions(&artifact.path, perms)
                .with_context(|| format!("Failed to set permissions on {:?}", artifact.path))?;
        }
    }
    #[cfg(not(unix))]
    {
        let _ = artifacts;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Statement;
    use strum::IntoEnumIterator;
    use tempfile::TempDir;

    #[test]
    fn test_kind_names_match_file_names() {
        for kind in ScriptKind::iter() {
            assert_eq!(kind.to_string(), kind.file_name());
            assert_eq!(kind.as_ref(), kind.file_name());
            let parsed: ScriptKind = kind.file_name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_write_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Allrun"), "stale contents\n").unwrap();

        let mut script = Script::new();
        script.push(Statement::Comment("fresh".into()));
        let artifact = write_script(tmp.path(), ScriptKind::Allrun, &script).unwrap();

        assert_eq!(artifact.path, tmp.path().join("Allrun"));
        assert_eq!(artifact.mode, 0o755);
        assert_eq!(fs::read_to_string(&artifact.path).unwrap(), "# fresh\n");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let result = write_script(&tmp.path().join("nope"), ScriptKind::RmCases, &Script::new());
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_permissions_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let artifact = write_script(tmp.path(), ScriptKind::Allclean, &Script::new()).unwrap();
        apply_permissions(std::slice::from_ref(&artifact)).unwrap();

        let mode = fs::metadata(&artifact.path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
