//! JavaScript client and model generator.

use std::path::Path;

use eyre::{Context, Result};
use oas_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use oas_core::{GeneratedFile, WriteResult};
use oas_schema::Document;
use tracing::{debug, info};

use crate::{
    client::ClientMethod,
    context::GenerationContext,
    enums::EnumDefinition,
    files::{
        ApiClientJs, ClientBaseJs, ClientJs, EnumJs, ModelBaseJs, ModelJs, ModelProxyJs,
        RuntimeFile,
    },
    model::ModelDefinition,
    naming::JS_NAMING,
    operations::group_operations,
};

/// Every file of one run, built before anything touches the disk.
pub struct Plan {
    pub files: Vec<Box<dyn GeneratedFile>>,
    pub models: usize,
    pub enums: usize,
    pub namespaces: usize,
    pub operations: usize,
}

impl Plan {
    /// Every file's output-relative path and content, without touching the disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }
}

/// Generates models and clients for one schema document.
pub struct Generator<'a> {
    document: &'a Document,
    context: GenerationContext,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self.plan()?.preview())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let plan = self.plan()?;
        self.write(&plan, output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(document: &'a Document, context: GenerationContext) -> Self {
        Self { document, context }
    }

    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Resolve every definition and operation into files.
    ///
    /// Fails on the first schema problem; nothing has been written then.
    pub fn plan(&self) -> oas_schema::Result<Plan> {
        let context = &self.context;
        let mut files: Vec<Box<dyn GeneratedFile>> = Vec::new();

        for runtime in RuntimeFile::all(context) {
            files.push(Box::new(runtime));
        }

        let mut enums = 0;
        for (name, schema) in &self.document.definitions {
            let definition = ModelDefinition::build(name, schema)?;
            let definition_enums: Vec<EnumDefinition> = definition.enums.clone();
            enums += definition_enums.len();

            files.push(Box::new(ModelJs::new(context, name)));
            files.push(Box::new(ModelBaseJs::new(context, definition)));
            for definition in definition_enums {
                files.push(Box::new(EnumJs::new(context, definition)));
            }
        }

        let models: Vec<String> = self.document.definitions.keys().cloned().collect();
        let model_count = models.len();
        files.push(Box::new(ModelProxyJs::new(context, models)));

        let mut namespaces = Vec::new();
        let mut operations = 0;
        for (namespace, group) in group_operations(self.document)? {
            let methods = group
                .values()
                .map(ClientMethod::build)
                .collect::<oas_schema::Result<Vec<_>>>()?;
            operations += methods.len();

            let namespace = JS_NAMING.type_name(&namespace);
            files.push(Box::new(ClientBaseJs::new(context, &namespace, methods)));
            files.push(Box::new(ClientJs::new(context, &namespace)));
            namespaces.push(namespace);
        }

        let namespace_count = namespaces.len();
        files.push(Box::new(ApiClientJs::new(context, namespaces)));

        Ok(Plan {
            files,
            models: model_count,
            enums,
            namespaces: namespace_count,
            operations,
        })
    }

    /// Write a plan under `output_dir`, honoring each file's overwrite rule.
    pub fn write(&self, plan: &Plan, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in &plan.files {
            let path = file.path(Path::new("")).display().to_string();
            let outcome = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to generate {}", path))?;

            debug!(file = %path, ?outcome, "generated");
            match outcome {
                WriteResult::Written => result.written.push(path),
                WriteResult::Created => result.created.push(path),
                WriteResult::Preserved => result.preserved.push(path),
            }
        }

        info!(
            models = plan.models,
            enums = plan.enums,
            namespaces = plan.namespaces,
            operations = plan.operations,
            written = result.written.len(),
            created = result.created.len(),
            preserved = result.preserved.len(),
            "generation finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use oas_schema::{HttpMethod, ObjectSchema, Operation, PathItem, Response, SchemaFragment};

    use super::*;

    fn document() -> Document {
        let mut invoice = ObjectSchema {
            ty: Some("object".into()),
            ..Default::default()
        };
        invoice
            .properties
            .insert("id".into(), SchemaFragment::primitive("integer"));
        invoice.properties.insert(
            "status".into(),
            SchemaFragment::primitive("string").with_enum(["open", "paid"]),
        );

        let mut operation = Operation {
            operation_id: Some("Billing::listInvoices".into()),
            ..Default::default()
        };
        operation.responses.insert(
            "200".into(),
            Response {
                description: Some("OK".into()),
                schema: Some(SchemaFragment::array(SchemaFragment::reference(
                    "#/definitions/Invoice",
                ))),
            },
        );
        let mut item = PathItem::default();
        item.operations.insert(HttpMethod::Get, operation);

        let mut document = Document::default();
        document.definitions.insert("Invoice".into(), invoice);
        document.paths.insert("/invoices".into(), item);
        document
    }

    #[test]
    fn test_plan_counts() {
        let document = document();
        let generator = Generator::new(&document, GenerationContext::default());
        let plan = generator.plan().unwrap();

        assert_eq!(plan.models, 1);
        assert_eq!(plan.enums, 1);
        assert_eq!(plan.namespaces, 1);
        assert_eq!(plan.operations, 1);
    }

    #[test]
    fn test_preview_paths_in_order() {
        let document = document();
        let generator = Generator::new(&document, GenerationContext::default());
        let paths: Vec<String> = generator
            .preview()
            .unwrap()
            .into_iter()
            .map(|file| file.path)
            .collect();

        assert_eq!(
            paths,
            [
                "src/models/base/ModelBaseClass.js",
                "src/models/base/DateOnly.js",
                "src/clients/base/ClientBaseClass.js",
                "src/models/Invoice.js",
                "src/models/base/InvoiceBase.js",
                "src/models/enum/InvoiceStatusEnum.js",
                "src/models/ModelProxyClass.js",
                "src/clients/base/BillingClientBase.js",
                "src/clients/BillingClient.js",
                "src/clients/ApiClient.js",
            ]
        );
    }

    #[test]
    fn test_schema_error_fails_before_writing() {
        let mut document = document();
        let broken = ObjectSchema {
            ty: Some("string".into()),
            ..Default::default()
        };
        document.definitions.insert("Broken".into(), broken);

        let dir = tempfile::TempDir::new().unwrap();
        let generator = Generator::new(&document, GenerationContext::default());
        assert!(generator.generate(dir.path()).is_err());
        assert!(!dir.path().join("src").exists());
    }
}
