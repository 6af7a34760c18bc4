//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// AST nodes are emitted through [`CodeBuilder::emit`]; the `push_` methods
/// write raw lines.
///
/// # Example
///
/// ```
/// use oas_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("class Foo {")
///     .push_indent()
///     .push_line("bar;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "class Foo {\n\tbar;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a multi-line documentation block.
    ///
    /// A `*/` inside a line is escaped so free text taken from a schema can
    /// never terminate the comment early.
    pub fn push_doc_block(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            let escaped = line.replace("*/", "*\\/");
            if escaped.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", escaped));
            }
        }
        self.push_line(" */")
    }

    /// Add a single-line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {}", text))
    }

    /// Emit a Renderable node.
    ///
    /// This is the primary way to render AST nodes.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::javascript();
        builder.push_line("let x = 1;").push_blank();
        assert_eq!(builder.build(), "let x = 1;\n\n");
    }

    #[test]
    fn test_spaces_indentation() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder
            .push_line("class Foo {")
            .push_indent()
            .push_line("bar;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "class Foo {\n  bar;\n}\n");
    }

    #[test]
    fn test_doc_block() {
        let mut builder = CodeBuilder::javascript();
        builder.push_indent().push_doc_block(&[
            "Invoice number".to_string(),
            String::new(),
            "@type {string} number".to_string(),
        ]);

        assert_eq!(
            builder.build(),
            "\t/**\n\t * Invoice number\n\t *\n\t * @type {string} number\n\t */\n"
        );
    }

    #[test]
    fn test_doc_block_escapes_comment_terminator() {
        let mut builder = CodeBuilder::javascript();
        builder.push_doc_block(&["glob like a/*/b".to_string()]);

        assert_eq!(builder.build(), "/**\n * glob like a/*\\/b\n */\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "if (ready) {".to_string(),
                    body: vec![CodeFragment::line("run();")],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::javascript();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "if (ready) {\n\trun();\n}\n");
    }

    #[test]
    fn test_emit_comment_and_sequence() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::sequence(vec![
                    CodeFragment::comment("generated"),
                    CodeFragment::indent(vec![CodeFragment::line("x;")]),
                ])]
            }
        }

        let mut builder = CodeBuilder::javascript();
        builder.emit(&Node);
        assert_eq!(builder.build(), "// generated\n\tx;\n");
    }
}
