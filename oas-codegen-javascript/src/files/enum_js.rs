//! Generated enumeration constants.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use crate::{ast::Export, code_file::CodeFile, context::GenerationContext, enums::EnumDefinition};

/// `<models>/enum/<Model><Property>Enum.js`
pub struct EnumJs {
    definition: EnumDefinition,
    path: PathBuf,
}

impl EnumJs {
    pub fn new(context: &GenerationContext, definition: EnumDefinition) -> Self {
        Self {
            path: context.enum_file(&definition.name()),
            definition,
        }
    }
}

impl GeneratedFile for EnumJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::generated()
            .add(self.definition.constant())
            .export(Export::default(self.definition.name()))
            .render()
    }
}
