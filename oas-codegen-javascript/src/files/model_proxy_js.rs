//! Generated model dispatcher.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Export, Import},
    code_file::CodeFile,
    context::GenerationContext,
    proxy::{PROXY_CLASS, proxy_class},
};

/// `<models>/ModelProxyClass.js`
pub struct ModelProxyJs {
    models: Vec<String>,
    path: PathBuf,
    imports: Vec<Import>,
}

impl ModelProxyJs {
    pub fn new(context: &GenerationContext, models: Vec<String>) -> Self {
        let path = context.model_proxy_file();
        let imports = models
            .iter()
            .map(|model| {
                Import::new(context.import_path(&path, &context.model_file(model))).default(model)
            })
            .collect();
        Self {
            models,
            path,
            imports,
        }
    }
}

impl GeneratedFile for ModelProxyJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::generated()
            .imports(self.imports.iter().cloned())
            .add(proxy_class(self.models.iter().map(String::as_str)))
            .export(Export::default(PROXY_CLASS))
            .render()
    }
}
