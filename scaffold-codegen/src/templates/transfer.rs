use std::path::PathBuf;

use kratos_scaffold_core::{FileRules, normalize_identifier, to_pascal_case};

use super::{BIZ_ID, ENT_ID, GENERATED_HEADER, Template, go_type, import_block};
use crate::{CodeBuilder, DataEnt, ProjectLayout, Result};

/// Conversions from ent entities to business models (`<name>_transfer.go`).
pub struct TransferGo<'a> {
    ent: &'a DataEnt,
}

impl<'a> TransferGo<'a> {
    pub fn new(ent: &'a DataEnt) -> Self {
        Self { ent }
    }

    /// (business field, ent field) pairs; the primary key is always mapped.
    fn assignments(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::with_capacity(self.ent.fields.len() + 1);
        if self.ent.primary_field().is_none() {
            pairs.push((BIZ_ID.to_string(), ENT_ID.to_string()));
        }
        for field in &self.ent.fields {
            go_type(self.name(), field)?;
            pairs.push((to_pascal_case(&field.name), normalize_identifier(&field.name)));
        }
        Ok(pairs)
    }
}

impl Template for TransferGo<'_> {
    fn name(&self) -> &'static str {
        "data transfer"
    }

    fn path(&self, layout: &ProjectLayout) -> PathBuf {
        layout.transfer_file().to_path_buf()
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self, layout: &ProjectLayout) -> Result<String> {
        let name = &self.ent.name;
        let assignments = self.assignments()?;
        // gofmt aligns the values of consecutive key-value lines.
        let width = assignments.iter().map(|(biz, _)| biz.len()).max().unwrap_or(0) + 1;

        let code = CodeBuilder::new()
            .line("package data")
            .blank()
            .raw(&import_block(&[vec![layout.biz_pkg(), layout.ent_pkg()]]))
            .blank()
            .block(
                &format!("func to{}Biz(e *ent.{}) *biz.{} {{", name, name, name),
                |b| {
                    b.block("if e == nil {", |b| b.line("return nil"))
                        .block_with_close(&format!("return &biz.{}{{", name), "}", |b| {
                            b.each(&assignments, |b, (biz, ent)| {
                                let key = format!("{}:", biz);
                                b.line(&format!("{:<width$} e.{},", key, ent))
                            })
                        })
                },
            )
            .blank()
            .block(
                &format!(
                    "func to{}BizList(es []*ent.{}) []*biz.{} {{",
                    name, name, name
                ),
                |b| {
                    b.line(&format!("list := make([]*biz.{}, 0, len(es))", name))
                        .block("for _, e := range es {", |b| {
                            b.line(&format!("list = append(list, to{}Biz(e))", name))
                        })
                        .line("return list")
                },
            )
            .build();

        Ok(code)
    }
}
