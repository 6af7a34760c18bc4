//! CodeFile abstraction for structured ES module generation.
//!
//! Provides a high-level API for generating JavaScript files with a header
//! comment, organized imports, body content and exports sections.

use oas_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// Header written at the top of every file that is rewritten on each run.
pub const GENERATED_HEADER: &str =
    "This file is generated by oas-client. Do not edit: it is rewritten on every run.";

/// A structured representation of an ES module.
///
/// Organizes code into four sections: header, imports, body and exports.
/// Each section is rendered in order with blank lines between them.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("./base/InvoiceBase.js").default("InvoiceBase"))
///     .add(class)
///     .export(Export::default("Invoice"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the file with the "generated, do not edit" comment.
    pub fn generated() -> Self {
        Self {
            header: Some(GENERATED_HEADER.to_string()),
            ..Self::default()
        }
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        let fragments = node.to_fragments();
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with tab indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVASCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut section_written = false;

        // 1. Header comment
        if let Some(header) = &self.header {
            builder.push_comment(header);
            section_written = true;
        }

        // 2. Imports
        if !self.imports.is_empty() {
            if section_written {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            section_written = true;
        }

        // 3. Body with blank lines between elements
        for fragments in &self.body {
            if section_written {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            section_written = true;
        }

        // 4. Exports
        if !self.exports.is_empty() {
            if section_written {
                builder.push_blank();
            }
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.imports.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Class, Stmt};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_full_file() {
        let file = CodeFile::generated()
            .import(Import::new("./ModelBaseClass.js").default("ModelBaseClass"))
            .add(Class::new("InvoiceBase").extends("ModelBaseClass"))
            .add(Stmt::expr("InvoiceBase.OrderByName = 'name'"))
            .export(Export::default("InvoiceBase"));

        assert_eq!(
            file.render(),
            format!(
                "// {}\n\
                 \n\
                 import ModelBaseClass from './ModelBaseClass.js';\n\
                 \n\
                 class InvoiceBase extends ModelBaseClass {{\n\
                 }}\n\
                 \n\
                 InvoiceBase.OrderByName = 'name';\n\
                 \n\
                 export default InvoiceBase;\n",
                GENERATED_HEADER
            )
        );
    }

    #[test]
    fn test_empty_body_nodes_are_skipped() {
        let file = CodeFile::new()
            .add(Vec::<Stmt>::new())
            .export(Export::default("X"));
        assert_eq!(file.render(), "export default X;\n");
    }
}
