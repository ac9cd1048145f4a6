// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Generation of the ent-backed data layer for one entity.
//!
//! # Module Organization
//!
//! - [`ent`] - The [`DataEnt`] aggregate built from parsed fields
//! - [`layout`] - Where generated files go inside the Go project
//! - [`templates`] - The schema, transfer, data and bootstrap files
//! - [`tools`] - External processes (`go`, `goimports`) behind narrow traits
//! - [`pipeline`] - Phase sequencing and the run state machine

mod builder;
pub mod ent;
mod error;
pub mod layout;
pub mod pipeline;
pub mod templates;
pub mod tools;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::CodeBuilder;
pub use ent::DataEnt;
pub use error::{Error, PhaseError, Result};
pub use layout::ProjectLayout;
pub use pipeline::{Pipeline, PhaseKind, PreviewFile, RunReport, RunState};
pub use tools::{GoImports, ImportNormalizer, Invocation, Passthrough, ProcessRunner, ToolOutput, ToolRunner};
pub use types::GoType;
