//! Codegen command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct CodegenReport {
    /// `info.title` of the document.
    pub title: Option<String>,

    /// `info.version` of the document.
    pub version: Option<String>,

    /// Number of definitions.
    pub model_count: usize,

    /// Number of operations across all paths.
    pub operation_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Project root.
    pub root: PathBuf,
    /// Regenerated files.
    pub written: Vec<String>,
    /// Create-once files written for the first time.
    pub created: Vec<String>,
    /// Create-once files left untouched.
    pub preserved: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for CodegenReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl CodegenReport {
    fn render_header(&self, out: &mut dyn Output) {
        match (&self.title, &self.version) {
            (Some(title), Some(version)) => out.preformatted(&format!("{} v{}", title, version)),
            (Some(title), None) => out.preformatted(title),
            _ => {}
        }
        out.preformatted(&format!(
            "{} models, {} operations",
            self.model_count, self.operation_count
        ));
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_header(out);

        out.key_value(
            "Generated",
            &format!(
                "{} files in {}",
                written.written.len(),
                written.root.display()
            ),
        );

        if !written.created.is_empty() {
            out.newline();
            out.section("New files");
            for file in &written.created {
                out.added_item(file);
            }
        }

        if !written.preserved.is_empty() {
            out.newline();
            out.section("Kept");
            for file in &written.preserved {
                out.kept_item(file);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_lists_created_and_kept() {
        let report = CodegenReport {
            title: Some("Billing".into()),
            version: Some("1.0".into()),
            model_count: 1,
            operation_count: 2,
            result: GenerationResult::Written(WrittenResult {
                root: PathBuf::from("."),
                written: vec!["src/models/base/InvoiceBase.js".into()],
                created: vec!["src/models/Invoice.js".into()],
                preserved: vec!["src/clients/BillingClient.js".into()],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "Billing v1.0");
        assert!(out.lines.contains(&"Generated: 1 files in .".to_string()));
        assert!(out.lines.contains(&"  + src/models/Invoice.js".to_string()));
        assert!(out.lines.contains(&"  = src/clients/BillingClient.js".to_string()));
    }
}
