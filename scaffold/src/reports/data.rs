//! Data command report data structures.

use super::output::{Output, Report};

/// Report data from generating one entity.
#[derive(Debug)]
pub struct DataReport {
    /// Normalized entity name.
    pub entity: String,
    /// Go module the files belong to.
    pub module: String,
    pub namespace: String,
    /// Query parameter names, in filter order.
    pub params: Vec<String>,
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    /// Paths relative to the module root.
    pub written: Vec<String>,
    /// Files that already existed and were left alone.
    pub skipped: Vec<String>,
    /// External commands that ran.
    pub tools: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for DataReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl DataReport {
    fn render_header(&self, out: &mut dyn Output) {
        out.key_value("Entity", &self.entity);
        out.key_value("Module", &self.module);
        if !self.namespace.is_empty() {
            out.key_value("Namespace", &self.namespace);
        }
        if !self.params.is_empty() {
            out.key_value("Query params", &self.params.join(", "));
        }
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_header(out);

        out.section("Generated");
        for path in &written.written {
            out.added_item(path);
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Unchanged (already exists)");
            for path in &written.skipped {
                out.list_item(path);
            }
        }

        if !written.tools.is_empty() {
            out.newline();
            out.section("Ran");
            for tool in &written.tools {
                out.list_item(tool);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        self.render_header(out);

        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(result: GenerationResult) -> DataReport {
        DataReport {
            entity: "User".to_string(),
            module: "github.com/acme/shop".to_string(),
            namespace: String::new(),
            params: vec!["idEq".to_string(), "nameContains".to_string()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(WrittenResult {
            written: vec!["internal/data/user.go".to_string()],
            skipped: vec!["internal/data/ent/generate.go".to_string()],
            tools: vec!["go mod tidy".to_string()],
        }))
        .render(&mut out);

        let text = out.text();
        assert!(text.contains("Entity: User"));
        assert!(text.contains("Module: github.com/acme/shop"));
        assert!(!text.contains("Namespace"));
        assert!(text.contains("Query params: idEq, nameContains"));
        assert!(text.contains("+ internal/data/user.go"));
        assert!(text.contains("- internal/data/ent/generate.go"));
        assert!(text.contains("- go mod tidy"));
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(vec![PreviewFile {
            path: "internal/data/user.go".to_string(),
            content: "package data".to_string(),
        }]))
        .render(&mut out);

        assert!(out.lines.contains(&"-- internal/data/user.go --".to_string()));
        assert!(out.lines.contains(&"package data".to_string()));
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 files would be generated")
        );
    }
}
