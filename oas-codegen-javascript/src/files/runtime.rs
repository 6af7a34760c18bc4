//! Runtime files copied next to the generated bases.

use std::path::{Path, PathBuf};

use oas_core::{FileRules, GeneratedFile};

use crate::context::GenerationContext;

pub const MODEL_BASE_CLASS: &str = "ModelBaseClass";
pub const CLIENT_BASE_CLASS: &str = "ClientBaseClass";

const MODEL_BASE_CLASS_JS: &str = include_str!("../../templates/ModelBaseClass.js");
const DATE_ONLY_JS: &str = include_str!("../../templates/DateOnly.js");
const CLIENT_BASE_CLASS_JS: &str = include_str!("../../templates/ClientBaseClass.js");

/// A runtime template, written on the first run and never touched again.
pub struct RuntimeFile {
    path: PathBuf,
    content: &'static str,
}

impl RuntimeFile {
    /// `ModelBaseClass.js`, `DateOnly.js` and `ClientBaseClass.js`.
    pub fn all(context: &GenerationContext) -> Vec<Self> {
        let models = context.models_base_dir();
        let clients = context.clients_base_dir();
        vec![
            Self {
                path: models.join(format!("{}.js", MODEL_BASE_CLASS)),
                content: MODEL_BASE_CLASS_JS,
            },
            Self {
                path: models.join("DateOnly.js"),
                content: DATE_ONLY_JS,
            },
            Self {
                path: clients.join(format!("{}.js", CLIENT_BASE_CLASS)),
                content: CLIENT_BASE_CLASS_JS,
            },
        ]
    }
}

impl GeneratedFile for RuntimeFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        self.content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_layout() {
        let files = RuntimeFile::all(&GenerationContext::default());
        let paths: Vec<_> = files.iter().map(|f| f.path(Path::new(""))).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("src/models/base/ModelBaseClass.js"),
                PathBuf::from("src/models/base/DateOnly.js"),
                PathBuf::from("src/clients/base/ClientBaseClass.js"),
            ]
        );
    }

    #[test]
    fn test_model_base_class_knows_every_tag() {
        for tag in ["'string'", "'date'", "'datetime'", "'float'", "'integer'", "'boolean'", "'object'"] {
            assert!(MODEL_BASE_CLASS_JS.contains(&format!("case {}:", tag)), "{tag}");
        }
        assert!(MODEL_BASE_CLASS_JS.contains("import DateOnly from './DateOnly.js';"));
    }
}
