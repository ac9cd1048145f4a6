use std::path::PathBuf;

use kratos_scaffold_core::to_snake_case;

use super::{Template, go_type, import_block};
use crate::{CodeBuilder, DataEnt, ProjectLayout, Result};

/// The ent schema of the entity (`ent/schema/<name>.go`).
pub struct SchemaGo<'a> {
    ent: &'a DataEnt,
}

impl<'a> SchemaGo<'a> {
    pub fn new(ent: &'a DataEnt) -> Self {
        Self { ent }
    }
}

impl Template for SchemaGo<'_> {
    fn name(&self) -> &'static str {
        "ent schema"
    }

    fn path(&self, layout: &ProjectLayout) -> PathBuf {
        layout.schema_file().to_path_buf()
    }

    fn render(&self, _layout: &ProjectLayout) -> Result<String> {
        let name = &self.ent.name;
        let mut builders = Vec::with_capacity(self.ent.fields.len());
        let mut imports = vec!["entgo.io/ent".to_string()];
        let mut third_party = Vec::new();

        for field in &self.ent.fields {
            let ty = go_type(self.name(), field)?;
            // Only builder arguments reference the type's package in a schema.
            if let (Some(import), Some(_)) = (ty.import, ty.extra_arg)
                && !third_party.iter().any(|i: &String| i == import)
            {
                third_party.push(import.to_string());
            }
            builders.push(format!("{},", ty.builder_call(&to_snake_case(&field.name))));
        }
        if !builders.is_empty() {
            imports.push("entgo.io/ent/schema/field".to_string());
        }
        imports.extend(third_party);

        let code = CodeBuilder::new()
            .line("package schema")
            .blank()
            .raw(&import_block(&[imports]))
            .blank()
            .comment(&format!(
                "{} holds the schema definition for the {} entity.",
                name, name
            ))
            .block(&format!("type {} struct {{", name), |b| b.line("ent.Schema"))
            .blank()
            .comment(&format!("Fields of the {}.", name))
            .block(&format!("func ({}) Fields() []ent.Field {{", name), |b| {
                if builders.is_empty() {
                    b.line("return nil")
                } else {
                    b.block_with_close("return []ent.Field{", "}", |b| {
                        b.each(&builders, |b, call| b.line(call))
                    })
                }
            })
            .blank()
            .comment(&format!("Edges of the {}.", name))
            .block(&format!("func ({}) Edges() []ent.Edge {{", name), |b| {
                b.line("return nil")
            })
            .build();

        Ok(code)
    }
}
