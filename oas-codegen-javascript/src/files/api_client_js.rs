//! Generated client facade.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use crate::{
    aggregate::{API_CLIENT_CLASS, api_client_class, client_class_name},
    ast::{Export, Import},
    code_file::CodeFile,
    context::GenerationContext,
};

/// `<clients>/ApiClient.js`
pub struct ApiClientJs {
    namespaces: Vec<String>,
    path: PathBuf,
    imports: Vec<Import>,
}

impl ApiClientJs {
    pub fn new(context: &GenerationContext, namespaces: Vec<String>) -> Self {
        let path = context.api_client_file();
        let imports = namespaces
            .iter()
            .map(|namespace| {
                Import::new(context.import_path(&path, &context.client_file(namespace)))
                    .default(client_class_name(namespace))
            })
            .collect();
        Self {
            namespaces,
            path,
            imports,
        }
    }
}

impl GeneratedFile for ApiClientJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::generated()
            .imports(self.imports.iter().cloned())
            .add(api_client_class(self.namespaces.iter().map(String::as_str)))
            .export(Export::default(API_CLIENT_CLASS))
            .render()
    }
}
