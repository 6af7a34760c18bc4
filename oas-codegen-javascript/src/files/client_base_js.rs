//! Generated client base class of one namespace.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use oas_core::{FileRules, GeneratedFile};

use super::CLIENT_BASE_CLASS;
use crate::{
    ast::{Class, Export, Import, JsDoc},
    client::ClientMethod,
    code_file::CodeFile,
    context::GenerationContext,
};

/// `<clients>/base/<Namespace>ClientBase.js`
pub struct ClientBaseJs {
    namespace: String,
    methods: Vec<ClientMethod>,
    path: PathBuf,
    imports: Vec<Import>,
}

impl ClientBaseJs {
    pub fn new(context: &GenerationContext, namespace: &str, methods: Vec<ClientMethod>) -> Self {
        let path = context.client_base_file(namespace);

        let mut imports = vec![
            Import::new(context.import_path(
                &path,
                &context
                    .clients_base_dir()
                    .join(format!("{}.js", CLIENT_BASE_CLASS)),
            ))
            .default(CLIENT_BASE_CLASS),
        ];
        let models: IndexSet<&str> = methods.iter().flat_map(ClientMethod::models).collect();
        imports.extend(models.into_iter().map(|model| {
            Import::new(context.import_path(&path, &context.model_file(model))).default(model)
        }));

        Self {
            namespace: namespace.to_string(),
            methods,
            path,
            imports,
        }
    }

    fn class_name(&self) -> String {
        format!("{}ClientBase", self.namespace)
    }
}

impl GeneratedFile for ClientBaseJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let class = Class::new(self.class_name())
            .extends(CLIENT_BASE_CLASS)
            .doc(
                JsDoc::new()
                    .line(format!("@class {}", self.class_name()))
                    .line(format!("@extends {}", CLIENT_BASE_CLASS)),
            )
            .methods(self.methods.iter().map(ClientMethod::method));

        let mut file = CodeFile::generated().imports(self.imports.iter().cloned());
        for method in &self.methods {
            file = file.add(method.handler_typedef());
        }

        file
            .add(class)
            .export(Export::default(self.class_name()))
            .render()
    }
}
