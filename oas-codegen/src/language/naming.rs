//! Naming conventions for generated code.

/// Language-specific naming conventions.
///
/// Defines how to transform schema names into type, member and parameter
/// names, and how to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a schema name to a type name (e.g., "billing" -> "Billing")
    pub to_type: fn(&str) -> String,
    /// Transform an operation name to a method name (e.g., "ListInvoices" -> "listInvoices")
    pub to_method: fn(&str) -> String,
    /// Transform a raw parameter name (e.g., "customer_id" -> "customerId")
    pub to_parameter: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "new" -> "_new")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform for use as a method name.
    ///
    /// Methods are class members, where reserved words are valid names, so
    /// no escaping is applied.
    pub fn method_name(&self, name: &str) -> String {
        (self.to_method)(name)
    }

    /// Transform and make safe for use as a parameter identifier.
    pub fn parameter_name(&self, name: &str) -> String {
        let transformed = (self.to_parameter)(name);
        self.safe_name(&transformed)
    }
}
