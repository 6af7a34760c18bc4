//! Module-level `const` declaration builder.

use oas_codegen::{CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConstValue {
    Expr(String),
    Object(JsObject),
    Array(Vec<String>),
}

/// Builder for `const name = value;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    name: String,
    value: ConstValue,
    frozen: bool,
}

impl Const {
    /// A single-line value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, ConstValue::Expr(value.into()))
    }

    /// An object literal value, one property per line.
    pub fn object(name: impl Into<String>, object: JsObject) -> Self {
        Self::with_value(name, ConstValue::Object(object))
    }

    /// An array literal value, one element per line.
    pub fn array(name: impl Into<String>, elements: Vec<String>) -> Self {
        Self::with_value(name, ConstValue::Array(elements))
    }

    fn with_value(name: impl Into<String>, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            value,
            frozen: false,
        }
    }

    /// Wrap the value in `Object.freeze(...)`.
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let (open, close) = if self.frozen {
            ("Object.freeze(", ");")
        } else {
            ("", ";")
        };
        let prefix = format!("const {} = {}", self.name, open);

        match &self.value {
            ConstValue::Expr(expr) => vec![CodeFragment::line(format!("{}{}{}", prefix, expr, close))],
            ConstValue::Object(object) => object.wrapped(&prefix, close),
            ConstValue::Array(elements) if elements.is_empty() => {
                vec![CodeFragment::line(format!("{}[]{}", prefix, close))]
            }
            ConstValue::Array(elements) => vec![CodeFragment::block(
                format!("{}[", prefix),
                elements
                    .iter()
                    .map(|element| CodeFragment::line(format!("{},", element)))
                    .collect(),
                Some(format!("]{}", close)),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use oas_codegen::CodeBuilder;

    use super::*;

    fn build(c: &Const) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(c);
        builder.build()
    }

    #[test]
    fn test_simple_const() {
        assert_eq!(build(&Const::new("limit", "42")), "const limit = 42;\n");
    }

    #[test]
    fn test_frozen_object() {
        let c = Const::object(
            "InvoiceStatusEnum",
            JsObject::new()
                .string("DRAFT", "draft")
                .string("IN_PROGRESS", "inProgress"),
        )
        .frozen();

        assert_eq!(
            build(&c),
            "const InvoiceStatusEnum = Object.freeze({\n\
             \tDRAFT: 'draft',\n\
             \tIN_PROGRESS: 'inProgress',\n\
             });\n"
        );
    }

    #[test]
    fn test_array() {
        let c = Const::array("modelDefinition", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(build(&c), "const modelDefinition = [\n\ta,\n\tb,\n];\n");
        assert_eq!(
            build(&Const::array("modelDefinition", Vec::new())),
            "const modelDefinition = [];\n"
        );
    }
}
