//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod data;
mod fields;
mod output;

pub use data::{DataReport, GenerationResult, PreviewFile, WrittenResult};
pub use fields::{FieldInfo, FieldsReport, PredicateInfo};
pub use output::{Output, Report, TerminalOutput};
