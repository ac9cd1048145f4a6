//! Core utilities and types for kratos-scaffold.
//!
//! This crate provides the identifier transforms shared by every generated
//! artifact and the rules used to put generated files on disk.

mod file;
mod inflect;
mod naming;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult, write_file};
// Singular/plural forms
pub use inflect::{pluralize, singularize};
// String utilities
pub use naming::{
    capitalize, normalize_identifier, to_camel_case, to_lower, to_pascal_case, to_snake_case,
};
