//! Generation pipeline for one entity.
//!
//! A [`Pipeline`] runs the schema, transfer and data phases in order over a
//! shared [`GenerationContext`]:
//!
//! - Schema: write `ent/schema/<name>.go`, bootstrap the ent package, run
//!   `go mod tidy` and `go generate`
//! - Transfer: write `<name>_transfer.go`
//! - Data: write `<name>.go`
//!
//! The first failure stops the run; files written before it stay on disk.
//!
//! # Example
//!
//! ```ignore
//! let pipeline = Pipeline::new(&ProcessRunner, &normalizer);
//! let report = pipeline.run(&ent, &layout, &config)?;
//! ```

mod context;
mod phase;
pub mod phases;
mod runner;
mod state;

pub use context::GenerationContext;
pub use phase::Phase;
pub use runner::Pipeline;
pub use state::{PhaseKind, PreviewFile, RunReport, RunState};
