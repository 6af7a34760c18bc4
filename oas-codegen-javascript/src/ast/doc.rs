//! JSDoc comment builder.

use oas_codegen::{CodeFragment, Renderable};

/// A `/** ... */` block, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsDoc {
    lines: Vec<String>,
}

impl JsDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free text, split on newlines. `None` and blank text add nothing.
    pub fn text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
            self.lines
                .extend(text.lines().map(|line| line.trim_end().to_string()));
        }
        self
    }

    /// An empty separator line, skipped when it would lead the block.
    pub fn blank(mut self) -> Self {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
        self
    }

    /// A raw line, typically a `@tag`.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// `@param {type} name rest`, with `[name]` for optional parameters.
    pub fn param(mut self, ty: &str, name: &str, optional: bool, rest: Option<&str>) -> Self {
        let name = if optional {
            format!("[{}]", name)
        } else {
            name.to_string()
        };
        self.lines.push(tagged("@param", ty, &name, rest));
        self
    }

    /// `@property {type} name rest`.
    pub fn property(mut self, ty: &str, name: &str, rest: Option<&str>) -> Self {
        self.lines.push(tagged("@property", ty, name, rest));
        self
    }

    /// `@type {type} name rest`.
    pub fn ty(mut self, ty: &str, name: &str, rest: Option<&str>) -> Self {
        self.lines.push(tagged("@type", ty, name, rest));
        self
    }

    pub fn returns(mut self, ty: &str) -> Self {
        self.lines.push(format!("@return {{{}}}", ty));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn tagged(tag: &str, ty: &str, name: &str, rest: Option<&str>) -> String {
    match rest.map(str::trim).filter(|r| !r.is_empty()) {
        Some(rest) => format!("{} {{{}}} {} {}", tag, ty, name, flatten(rest)),
        None => format!("{} {{{}}} {}", tag, ty, name),
    }
}

/// Tag lines hold a single line of text.
fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Renderable for JsDoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut lines = self.lines.clone();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        if lines.is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::doc_block(lines)]
    }
}
