//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating API clients in a new language.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk.
    ///
    /// Fails with the same schema errors as [`LanguageCodegen::generate`].
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Regenerated files that were (re)written
    pub written: Vec<String>,
    /// Create-once files written for the first time
    pub created: Vec<String>,
    /// Create-once files that already existed and were left untouched
    pub preserved: Vec<String>,
}

impl GenerateResult {
    /// Total number of files touched or considered.
    pub fn total(&self) -> usize {
        self.written.len() + self.created.len() + self.preserved.len()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
