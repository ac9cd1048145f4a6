//! Fields command report data structures.

use kratos_scaffold_field::{Arity, PredicateParam};
use serde::Serialize;

use super::output::{Output, Report};

/// Parsed fields, or the predicate table when no field was given.
#[derive(Debug)]
pub struct FieldsReport {
    pub fields: Vec<FieldInfo>,
    pub predicates: Vec<PredicateInfo>,
}

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub name: String,
    pub declared_type: String,
    pub params: Vec<PredicateParam>,
}

#[derive(Debug)]
pub struct PredicateInfo {
    pub token: &'static str,
    pub param_suffix: &'static str,
    pub ent_suffix: &'static str,
    pub arity: Arity,
}

fn arity_label(arity: Arity) -> &'static str {
    match arity {
        Arity::Single => "value",
        Arity::List => "list",
        Arity::Flag => "flag",
    }
}

impl Report for FieldsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.fields.is_empty() {
            out.title("Predicates");
            for p in &self.predicates {
                out.list_item(&format!(
                    "{:<13} <field>{:<13} ent <Field>{:<13} {}",
                    p.token,
                    p.param_suffix,
                    p.ent_suffix,
                    arity_label(p.arity)
                ));
            }
            return;
        }

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", field.name, field.declared_type));
            if field.params.is_empty() {
                out.list_item("no query params");
            }
            for param in &field.params {
                out.list_item(&format!("{} -> {}", param.name, param.storage_accessor));
            }
        }
    }
}
