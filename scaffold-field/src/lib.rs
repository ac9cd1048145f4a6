// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Field and predicate model.
//!
//! A field token such as `age:int32:gte,lte` is parsed into a [`Field`]
//! whose predicates are resolved through a [`PredicateRegistry`]. Each
//! (field, predicate) pair projects to a [`PredicateParam`], which names the
//! generated query parameter and the ent predicate function it maps onto.

mod error;
mod field;
mod predicate;
mod registry;

pub use error::{Error, Result};
pub use field::{Field, FieldParser, Predicate, PredicateParam};
pub use predicate::{Arity, PredicateKind};
pub use registry::PredicateRegistry;
