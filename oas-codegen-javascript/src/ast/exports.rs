//! ES module export builder.

use oas_codegen::{CodeFragment, Renderable};

/// Builder for `export default` statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    default: String,
}

impl Export {
    /// Export `name` as the module's default export.
    pub fn default(name: impl Into<String>) -> Self {
        Self {
            default: name.into(),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("export default {};", self.default))]
    }
}
