//! User-owned model class.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Class, Export, Import, JsDoc},
    code_file::CodeFile,
    context::GenerationContext,
};

/// `<models>/<Name>.js`: an empty subclass of the generated base, created
/// once and then owned by the project.
pub struct ModelJs {
    name: String,
    path: PathBuf,
    base_import: String,
}

impl ModelJs {
    pub fn new(context: &GenerationContext, name: &str) -> Self {
        let path = context.model_file(name);
        let base_import = context.import_path(&path, &context.model_base_file(name));
        Self {
            name: name.to_string(),
            path,
            base_import,
        }
    }
}

impl GeneratedFile for ModelJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let base = format!("{}Base", self.name);
        let class = Class::new(&self.name).extends(&base).doc(
            JsDoc::new()
                .line(format!("@class {}", self.name))
                .line(format!("@extends {}", base)),
        );

        CodeFile::new()
            .import(Import::new(&self.base_import).default(&base))
            .add(class)
            .export(Export::default(&self.name))
            .render()
    }
}
