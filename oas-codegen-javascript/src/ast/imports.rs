//! ES module import builder.

use oas_codegen::{CodeFragment, Renderable};

use super::quote;

/// Builder for `import` statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    default: Option<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let from = quote(&self.from);
        let statement = match &self.default {
            Some(def) => format!("import {} from {};", def, from),
            None => format!("import {};", from),
        };
        vec![CodeFragment::line(statement)]
    }
}
