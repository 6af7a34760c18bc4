//! Codegen operation - models and clients from the loaded document.

use std::path::Path;

use eyre::{Context, Result};
use oas_codegen_javascript::{Generator, Plan};
use oas_schema::Document;

use crate::reports::{CodegenReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the codegen operation.
pub struct CodegenOptions<'a> {
    /// Project root the configured destinations are relative to.
    pub root: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the codegen operation for an already built plan.
///
/// Planning is left to the caller so schema errors surface as diagnostics
/// before anything is written.
pub fn codegen(
    document: &Document,
    generator: &Generator,
    plan: &Plan,
    opts: CodegenOptions,
) -> Result<CodegenReport> {
    let result = if opts.dry_run {
        let files = plan
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator
            .write(plan, opts.root)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            root: opts.root.to_path_buf(),
            written: written.written,
            created: written.created,
            preserved: written.preserved,
        })
    };

    Ok(CodegenReport {
        title: document.info.title.clone(),
        version: document.info.version.clone(),
        model_count: document.definitions.len(),
        operation_count: document.operation_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use oas_codegen_javascript::GenerationContext;
    use oas_schema::OasConfig;
    use tempfile::TempDir;

    use super::*;

    fn document() -> Document {
        Document::from_source(
            r#"{
                "swagger": "2.0",
                "info": {"title": "Billing", "version": "1.0"},
                "definitions": {"Invoice": {"type": "object", "properties": {"id": {"type": "integer"}}}},
                "paths": {}
            }"#,
            "swagger.json",
        )
        .unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let document = document();
        let config = OasConfig::init("swagger.json");
        let generator = Generator::new(&document, GenerationContext::from_config(&config));
        let plan = generator.plan().unwrap();
        let report = codegen(
            &document,
            &generator,
            &plan,
            CodegenOptions {
                root: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(_)));
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_generate_into_configured_destinations() {
        let dir = TempDir::new().unwrap();
        let document = document();
        let config = OasConfig::init("swagger.json").with_models_destination("web/models");
        let generator = Generator::new(&document, GenerationContext::from_config(&config));
        let plan = generator.plan().unwrap();
        let report = codegen(
            &document,
            &generator,
            &plan,
            CodegenOptions {
                root: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.model_count, 1);
        assert!(dir.path().join("web/models/Invoice.js").is_file());
        assert!(dir.path().join("src/clients/ApiClient.js").is_file());
    }

    #[test]
    fn test_schema_error_surfaces_while_planning() {
        let document = Document::from_source(
            r#"{
                "swagger": "2.0",
                "info": {"title": "Billing", "version": "1.0"},
                "definitions": {"Invoice": {"type": "object", "properties": {"id": {}}}},
                "paths": {}
            }"#,
            "swagger.json",
        )
        .unwrap();
        let config = OasConfig::init("swagger.json");
        let generator = Generator::new(&document, GenerationContext::from_config(&config));

        let err = generator.plan().err().unwrap();
        assert!(matches!(*err, oas_schema::Error::MissingType { ref owner } if owner == "Invoice.id"));
    }
}
