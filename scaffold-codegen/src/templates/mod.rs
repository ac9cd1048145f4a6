//! The files a run produces.
//!
//! Each template renders from the [`DataEnt`](crate::DataEnt) and the
//! resolved [`ProjectLayout`]; writing and import normalization are left to
//! the pipeline.

mod bootstrap;
mod data;
mod schema;
mod transfer;

use std::path::PathBuf;

pub use bootstrap::{ExternalSqlTmpl, GenerateGo};
pub use data::DataGo;
use kratos_scaffold_core::FileRules;
use kratos_scaffold_field::Field;
pub use schema::SchemaGo;
pub use transfer::TransferGo;

use crate::{Error, GoType, ProjectLayout, Result};

/// Header marking files that are rewritten on every run.
pub const GENERATED_HEADER: &str = "// Code generated by kratos-scaffold. DO NOT EDIT.";

/// Primary key field of a business model.
pub(crate) const BIZ_ID: &str = "Id";

/// Primary key accessor of an ent entity.
pub(crate) const ENT_ID: &str = "ID";

/// A generated file.
pub trait Template {
    /// What the file is, for logs and errors (`data transfer`).
    fn name(&self) -> &'static str;

    /// Where the file goes.
    fn path(&self, layout: &ProjectLayout) -> PathBuf;

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    /// Render the Go source, before import normalization.
    fn render(&self, layout: &ProjectLayout) -> Result<String>;
}

/// Resolve the storage mapping of a field's declared type.
pub(crate) fn go_type(template: &'static str, field: &Field) -> Result<GoType> {
    GoType::resolve(&field.declared_type).ok_or_else(|| {
        Error::render(
            template,
            format!(
                "field '{}' has type '{}' which has no ent mapping",
                field.name, field.declared_type
            ),
        )
    })
}

/// Render a Go import block, or nothing when every group is empty.
///
/// Groups are separated by a blank line; empty groups are dropped.
pub(crate) fn import_block(groups: &[Vec<String>]) -> String {
    let groups: Vec<&Vec<String>> = groups.iter().filter(|g| !g.is_empty()).collect();
    if groups.is_empty() {
        return String::new();
    }

    let mut out = String::from("import (\n");
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for import in group.iter() {
            out.push_str(&format!("\t\"{}\"\n", import));
        }
    }
    out.push_str(")\n");
    out
}
