//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from building every file in memory.
#[derive(Debug)]
pub struct CheckReport {
    /// Locator of the checked document.
    pub swagger_url: String,
    pub models: usize,
    pub enums: usize,
    pub namespaces: usize,
    pub operations: usize,
    /// Files a `codegen` run would consider.
    pub files: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.swagger_url));
        out.newline();
        out.key_value_indented("models", &self.models.to_string());
        out.key_value_indented("enums", &self.enums.to_string());
        out.key_value_indented("namespaces", &self.namespaces.to_string());
        out.key_value_indented("operations", &self.operations.to_string());
        out.key_value_indented("files", &self.files.to_string());
    }
}
