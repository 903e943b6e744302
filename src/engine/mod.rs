//! Engine modules: turn a study directory into script plans.
//!
//! Each generator is split in two: a pure part that builds a [`Script`] from
//! its inputs, and a thin writer that puts it on disk and returns the
//! resulting [`Artifact`]s.
//!
//! [`Script`]: crate::script::Script
//! [`Artifact`]: crate::script::Artifact

pub mod remove;
pub mod run_clean;
