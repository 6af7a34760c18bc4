//! User-owned client class of one namespace.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use crate::{
    aggregate::client_class_name,
    ast::{Class, Export, Import, JsDoc},
    code_file::CodeFile,
    context::GenerationContext,
};

/// `<clients>/<Namespace>Client.js`, created once like model files.
pub struct ClientJs {
    namespace: String,
    path: PathBuf,
    base_import: String,
}

impl ClientJs {
    pub fn new(context: &GenerationContext, namespace: &str) -> Self {
        let path = context.client_file(namespace);
        let base_import = context.import_path(&path, &context.client_base_file(namespace));
        Self {
            namespace: namespace.to_string(),
            path,
            base_import,
        }
    }
}

impl GeneratedFile for ClientJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let name = client_class_name(&self.namespace);
        let base = format!("{}Base", name);
        let class = Class::new(&name).extends(&base).doc(
            JsDoc::new()
                .line(format!("@class {}", name))
                .line(format!("@extends {}", base)),
        );

        CodeFile::new()
            .import(Import::new(&self.base_import).default(&base))
            .add(class)
            .export(Export::default(name))
            .render()
    }
}
