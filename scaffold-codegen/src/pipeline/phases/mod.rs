//! The schema, transfer and data phases.

mod data;
mod schema;
mod transfer;

pub use data::DataPhase;
pub use schema::SchemaPhase;
pub use transfer::TransferPhase;
