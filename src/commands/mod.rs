//! Command implementations for the pkgmerge CLI

pub mod check;
pub mod completions;
pub mod merge;
pub mod version;
