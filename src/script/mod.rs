//! Shell script model.
//!
//! Generators build a [`Script`] out of typed [`Statement`]s; a single
//! serializer turns it into text. Writing a script yields an [`Artifact`]
//! describing where it went and which permission bits it should carry; the
//! caller decides whether to apply them.

pub mod artifact;
pub mod statement;

pub use artifact::{apply_permissions, write_script, Artifact, ScriptKind};
pub use statement::{Script, Statement};
