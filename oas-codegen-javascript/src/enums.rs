//! Enumeration constants derived from `enum` lists.

use oas_core::{capitalize, to_upper_snake_case};

use crate::{
    ast::{Const, JsObject},
    naming::identifier_chars,
};

/// One frozen constant table, owned by a model property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub model: String,
    pub property: String,
    /// `(constant key, literal)` in declaration order.
    pub values: Vec<(String, String)>,
}

impl EnumDefinition {
    pub fn new(model: impl Into<String>, property: impl Into<String>, literals: &[String]) -> Self {
        Self {
            model: model.into(),
            property: property.into(),
            values: literals
                .iter()
                .map(|literal| (constant_key(literal), literal.clone()))
                .collect(),
        }
    }

    /// `<Model><Property>Enum`, also the file stem.
    pub fn name(&self) -> String {
        format!(
            "{}{}Enum",
            self.model,
            capitalize(&identifier_chars(&self.property))
        )
    }

    /// `const <Name> = Object.freeze({ ... });`
    pub fn constant(&self) -> Const {
        let object = self
            .values
            .iter()
            .fold(JsObject::new(), |object, (key, literal)| {
                object.string(key, literal)
            });
        Const::object(self.name(), object).frozen()
    }
}

/// `inProgress` -> `IN_PROGRESS`.
pub fn constant_key(literal: &str) -> String {
    to_upper_snake_case(literal)
}

#[cfg(test)]
mod tests {
    use oas_codegen::CodeBuilder;

    use super::*;

    fn literals(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_name() {
        let definition = EnumDefinition::new("Invoice", "status", &literals(&["draft"]));
        assert_eq!(definition.name(), "InvoiceStatusEnum");

        let odd = EnumDefinition::new("Ticket", "x-state", &literals(&["open"]));
        assert_eq!(odd.name(), "TicketXstateEnum");
    }

    #[test]
    fn test_constant_keys() {
        assert_eq!(constant_key("inProgress"), "IN_PROGRESS");
        assert_eq!(constant_key("draft"), "DRAFT");
        assert_eq!(constant_key("in progress"), "IN PROGRESS");
    }

    #[test]
    fn test_constant_rendering() {
        let definition = EnumDefinition::new(
            "Invoice",
            "status",
            &literals(&["draft", "inProgress", "on hold", "2"]),
        );

        let mut builder = CodeBuilder::javascript();
        builder.emit(&definition.constant());
        assert_eq!(
            builder.build(),
            "const InvoiceStatusEnum = Object.freeze({\n\
             \tDRAFT: 'draft',\n\
             \tIN_PROGRESS: 'inProgress',\n\
             \t'ON HOLD': 'on hold',\n\
             \t'2': '2',\n\
             });\n"
        );
    }
}
