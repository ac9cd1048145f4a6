//! Code builder for tab-indented Go source.

/// Fluent API for building Go code with tab indentation.
///
/// # Example
///
/// ```
/// use kratos_scaffold_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("func main() {")
///     .indent()
///     .line("fmt.Println(\"hello\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\tfmt.Println(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `header { ... }` block closed by a lone `}`.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.block_with_close(header, "}", f)
    }

    /// Add a block with a custom closing line (`)`, `})`, ...).
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a `// text` comment line.
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("// {}", text))
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("package data").build();
        assert_eq!(code, "package data\n");
    }

    #[test]
    fn test_block_uses_tabs() {
        let code = CodeBuilder::new()
            .block("type userRepo struct {", |b| b.line("data *Data"))
            .build();

        assert_eq!(code, "type userRepo struct {\n\tdata *Data\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::new()
            .block("func f() {", |b| {
                b.block("if ok {", |b| b.line("return"))
            })
            .build();

        assert_eq!(code, "func f() {\n\tif ok {\n\t\treturn\n\t}\n}\n");
    }

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::new()
            .block_with_close("import (", ")", |b| b.line("\"context\""))
            .build();

        assert_eq!(code, "import (\n\t\"context\"\n)\n");
    }

    #[test]
    fn test_comment_and_blank() {
        let code = CodeBuilder::new()
            .comment("Code generated. DO NOT EDIT.")
            .blank()
            .line("package ent")
            .build();

        assert_eq!(code, "// Code generated. DO NOT EDIT.\n\npackage ent\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .each(["ID", "Name"], |b, name| b.line(&format!("{}: e.{},", name, name)))
            .build();

        assert_eq!(code, "ID: e.ID,\nName: e.Name,\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::new().dedent().line("x").raw("y").build();
        assert_eq!(code, "x\ny");
    }
}
