//! JavaScript naming conventions.

use oas_codegen::language::NamingConvention;
use oas_core::{capitalize, lower_first, to_camel_case, to_pascal_case};

fn escape_js_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Prefix `_` when `name` is empty or starts with a digit.
fn leading_identifier(name: String) -> String {
    match name.chars().next() {
        Some(c) if !c.is_ascii_digit() => name,
        _ => format!("_{}", name),
    }
}

/// `filter[status]` -> `filterStatus`, `2fa` -> `_2fa`.
fn js_parameter_name(name: &str) -> String {
    let separated: String = name
        .chars()
        .map(|c| if is_identifier_char(c) { c } else { '_' })
        .collect();
    leading_identifier(to_camel_case(&separated))
}

/// `ListInvoices` -> `listInvoices`, `list-invoices` -> `listInvoices`.
///
/// Underscores survive, so `list_invoices` keeps its shape.
fn js_method_name(name: &str) -> String {
    let joined: String = name
        .split(|c: char| !is_identifier_char(c))
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| if i == 0 { lower_first(part) } else { capitalize(part) })
        .collect();
    leading_identifier(joined)
}

/// JavaScript naming conventions.
pub const JS_NAMING: NamingConvention = NamingConvention {
    // Namespaces and models use PascalCase
    to_type: to_pascal_case,
    // Operation names become camelCase methods
    to_method: js_method_name,
    // Raw parameter names are split on punctuation and camel-cased
    to_parameter: js_parameter_name,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict mode reserved words
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "await",
        "arguments",
        "eval",
    ],
    escape_reserved: escape_js_reserved,
};

/// Whether `name` can be written as a bare JavaScript identifier.
///
/// Only the identifier shape is checked; reserved words are still valid
/// property names.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Key for an object literal or class field: bare when possible, quoted otherwise.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        crate::ast::quote(name)
    }
}

/// Identifier built from arbitrary text by dropping every non-identifier character.
pub fn identifier_chars(text: &str) -> String {
    text.chars().filter(|c| is_identifier_char(*c)).collect()
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names() {
        assert_eq!(JS_NAMING.parameter_name("customer_id"), "customerId");
        assert_eq!(JS_NAMING.parameter_name("limit"), "limit");
        assert_eq!(JS_NAMING.parameter_name("new"), "_new");
        assert_eq!(JS_NAMING.parameter_name("x-request-id"), "xRequestId");
    }

    #[test]
    fn test_parameter_names_are_identifiers() {
        assert_eq!(JS_NAMING.parameter_name("filter[status]"), "filterStatus");
        assert_eq!(JS_NAMING.parameter_name("page.size"), "pageSize");
        assert_eq!(JS_NAMING.parameter_name("2fa"), "_2fa");
        assert_eq!(JS_NAMING.parameter_name("_"), "_");
        assert!(is_identifier(&JS_NAMING.parameter_name("sort by")));
    }

    #[test]
    fn test_method_and_type_names() {
        assert_eq!(JS_NAMING.method_name("ListInvoices"), "listInvoices");
        assert_eq!(JS_NAMING.method_name("Delete"), "delete");
        assert_eq!(JS_NAMING.method_name("list-invoices"), "listInvoices");
        assert_eq!(JS_NAMING.method_name("list_invoices"), "list_invoices");
        assert_eq!(JS_NAMING.method_name("3DSecure"), "_3DSecure");
        assert_eq!(JS_NAMING.type_name("billing"), "Billing");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("dueDate"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(is_identifier("default"));
        assert!(!is_identifier("x-request-id"));
        assert!(!is_identifier("first.name"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("IN_PROGRESS"), "IN_PROGRESS");
        assert_eq!(property_key("x-request-id"), "'x-request-id'");
        assert_eq!(property_key("2FA"), "'2FA'");
    }

    #[test]
    fn test_identifier_chars() {
        assert_eq!(identifier_chars("created-at"), "createdat");
        assert_eq!(identifier_chars("name asc"), "nameasc");
    }
}
