//! Files the ent package needs once; later runs leave them alone.

use std::path::PathBuf;

use kratos_scaffold_core::FileRules;

use super::Template;
use crate::{ProjectLayout, Result};

/// `generate.go`, holding the `go:generate` directive that runs entc.
pub struct GenerateGo<'a> {
    features: &'a [String],
}

impl<'a> GenerateGo<'a> {
    pub fn new(features: &'a [String]) -> Self {
        Self { features }
    }

    fn directive(&self) -> String {
        let mut directive =
            "//go:generate go run -mod=mod entgo.io/ent/cmd/ent generate --template ./external"
                .to_string();
        if !self.features.is_empty() {
            directive.push_str(" --feature ");
            directive.push_str(&self.features.join(","));
        }
        directive.push_str(" ./schema");
        directive
    }
}

impl Template for GenerateGo<'_> {
    fn name(&self) -> &'static str {
        "ent generate.go"
    }

    fn path(&self, layout: &ProjectLayout) -> PathBuf {
        layout.schema_root().join("generate.go")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self, _layout: &ProjectLayout) -> Result<String> {
        Ok(format!("package ent\n\n{}\n", self.directive()))
    }
}

/// `external/sql.tmpl`, an entc template exposing the client's `*sql.DB`.
pub struct ExternalSqlTmpl;

const SQL_TMPL: &str = r#"{{ define "external" }}
package ent

import (
	"database/sql"

	"entgo.io/ent/dialect"
	entsql "entgo.io/ent/dialect/sql"
)

func (c *Client) DB() *sql.DB {
	switch d := c.driver.(type) {
	case *entsql.Driver:
		return d.DB()
	case *dialect.DebugDriver:
		return d.Driver.(*entsql.Driver).DB()
	default:
		panic("unknown driver")
	}
}

{{ end }}
"#;

impl Template for ExternalSqlTmpl {
    fn name(&self) -> &'static str {
        "ent external template"
    }

    fn path(&self, layout: &ProjectLayout) -> PathBuf {
        layout.schema_root().join("external").join("sql.tmpl")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self, _layout: &ProjectLayout) -> Result<String> {
        Ok(SQL_TMPL.to_string())
    }
}
