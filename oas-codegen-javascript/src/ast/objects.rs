//! Object literal builder.

use oas_codegen::CodeFragment;

use super::quote;
use crate::naming::property_key;

/// A JavaScript object literal, one `key: value,` line per property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsObject {
    properties: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: &str, value: &str) -> Self {
        self.raw(key, quote(value))
    }

    /// Add a property with a raw expression value (will not be quoted).
    ///
    /// Keys that are not identifiers are quoted.
    pub fn raw(mut self, key: &str, value: impl Into<String>) -> Self {
        self.properties.push((property_key(key), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Fragments for the object used as the tail of an expression:
    /// `{prefix}{` ... `}{suffix}`.
    pub(crate) fn wrapped(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::line(format!("{}{{}}{}", prefix, suffix))];
        }
        let body = self
            .properties
            .iter()
            .map(|(key, value)| CodeFragment::line(format!("{}: {},", key, value)))
            .collect();
        vec![CodeFragment::block(
            format!("{}{{", prefix),
            body,
            Some(format!("}}{}", suffix)),
        )]
    }
}

#[cfg(test)]
mod tests {
    use oas_codegen::CodeBuilder;

    use super::*;

    fn build(object: &JsObject) -> String {
        let mut builder = CodeBuilder::javascript();
        for fragment in object.wrapped("x = ", ";") {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(build(&JsObject::new()), "x = {};\n");
    }

    #[test]
    fn test_string_and_raw_values() {
        let object = JsObject::new().string("DRAFT", "draft").raw("count", "42");
        assert_eq!(build(&object), "x = {\n\tDRAFT: 'draft',\n\tcount: 42,\n};\n");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let object = JsObject::new().string("IN PROGRESS", "in progress");
        assert_eq!(build(&object), "x = {\n\t'IN PROGRESS': 'in progress',\n};\n");
    }
}
