//! Check operation - build every file in memory.

use oas_codegen_javascript::{GenerationContext, Generator};
use oas_schema::{Document, OasConfig, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Resolves every definition and operation exactly like `codegen` would,
/// stopping at the first schema error.
pub fn check(document: &Document, config: &OasConfig) -> Result<CheckReport> {
    let generator = Generator::new(document, GenerationContext::from_config(config));
    let plan = generator.plan()?;

    Ok(CheckReport {
        swagger_url: config.swagger_url.clone(),
        models: plan.models,
        enums: plan.enums,
        namespaces: plan.namespaces,
        operations: plan.operations,
        files: plan.files.len(),
    })
}
