//! Shared utility functions for code generation.

use std::path::{Component, Path};

/// Convert a raw schema name to camelCase (e.g., "customer_id" -> "customerId").
///
/// The name is split on `_` and `-`, every part is lower-cased and all parts
/// after the first are capitalized.
pub fn to_camel_case(s: &str) -> String {
    s.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            let lower = part.to_lowercase();
            if i == 0 { lower } else { capitalize(&lower) }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(capitalize)
        .collect()
}

/// Re-case a camelCase literal to UPPER_SNAKE_CASE (e.g., "inProgress" -> "IN_PROGRESS").
///
/// A `_` is inserted before every uppercase letter except a leading one.
pub fn to_upper_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_uppercase());
    }
    result
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// ES module import specifier for `to` as seen from the file `from`.
///
/// Both paths are relative to the same output root. The result always starts
/// with `./` or `../` and uses `/` separators.
pub fn relative_import(from: &Path, to: &Path) -> String {
    let from_dir: Vec<_> = normal_components(from.parent().unwrap_or(Path::new("")));
    let target: Vec<_> = normal_components(to);

    let common = from_dir
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from_dir.len() - common;
    let rest = target[common..].join("/");

    if ups == 0 {
        format!("./{}", rest)
    } else {
        format!("{}{}", "../".repeat(ups), rest)
    }
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("customer_id"), "customerId");
        assert_eq!(to_camel_case("page_size_max"), "pageSizeMax");
        assert_eq!(to_camel_case("limit"), "limit");
        assert_eq!(to_camel_case("Customer_ID"), "customerId");
        assert_eq!(to_camel_case("x-request-id"), "xRequestId");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_upper_snake_case() {
        assert_eq!(to_upper_snake_case("inProgress"), "IN_PROGRESS");
        assert_eq!(to_upper_snake_case("open"), "OPEN");
        assert_eq!(to_upper_snake_case("Open"), "OPEN");
        assert_eq!(to_upper_snake_case("waitingForCustomerReply"), "WAITING_FOR_CUSTOMER_REPLY");
    }

    #[test]
    fn test_capitalize_and_lower_first() {
        assert_eq!(capitalize("status"), "Status");
        assert_eq!(capitalize("dueDate"), "DueDate");
        assert_eq!(lower_first("ListInvoices"), "listInvoices");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_relative_import_same_dir() {
        let spec = relative_import(
            Path::new("src/models/ModelProxyClass.js"),
            Path::new("src/models/Invoice.js"),
        );
        assert_eq!(spec, "./Invoice.js");
    }

    #[test]
    fn test_relative_import_parent_dir() {
        let spec = relative_import(
            Path::new("src/models/base/InvoiceBase.js"),
            Path::new("src/models/Invoice.js"),
        );
        assert_eq!(spec, "../Invoice.js");
    }

    #[test]
    fn test_relative_import_sibling_tree() {
        let spec = relative_import(
            Path::new("src/clients/base/BillingClientBase.js"),
            Path::new("src/models/Invoice.js"),
        );
        assert_eq!(spec, "../../models/Invoice.js");
    }

    #[test]
    fn test_relative_import_child_dir() {
        let spec = relative_import(
            Path::new("src/clients/BillingClient.js"),
            Path::new("src/clients/base/BillingClientBase.js"),
        );
        assert_eq!(spec, "./base/BillingClientBase.js");
    }
}
