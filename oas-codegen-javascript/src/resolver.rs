//! Property resolver: one schema fragment to its JavaScript type description.

use oas_runtime::HydrationTag;
use oas_schema::{Error, Result, SchemaFragment};

use crate::ast::quote;

/// The shape of a fragment, derived from `$ref`/`type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentKind<'a> {
    Reference(&'a str),
    String,
    Number,
    Integer,
    Boolean,
    Object,
    File,
    Array(&'a SchemaFragment),
}

/// What a fragment means in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// JSDoc type (`string`, `[Invoice]`, `'open'|'closed'`).
    pub display: String,
    /// Hydration table tag; `None` for kinds that never appear in responses.
    pub hydration: Option<HydrationTag>,
    /// Human-readable format label (`date only`, `int64`).
    pub format: Option<String>,
}

/// Model name of a `$ref`: everything after the last `/`.
pub fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Classify a fragment. `owner` names the property in errors.
pub fn kind<'a>(owner: &str, fragment: &'a SchemaFragment) -> Result<FragmentKind<'a>> {
    if let Some(reference) = &fragment.reference {
        return Ok(FragmentKind::Reference(reference_name(reference)));
    }

    let ty = fragment.ty.as_deref().ok_or_else(|| Error::missing_type(owner))?;
    let kind = match ty {
        "string" => FragmentKind::String,
        "number" => FragmentKind::Number,
        "integer" => FragmentKind::Integer,
        "boolean" => FragmentKind::Boolean,
        "object" => FragmentKind::Object,
        "file" => FragmentKind::File,
        "array" => {
            let items = fragment
                .items
                .as_deref()
                .ok_or_else(|| Error::missing_array_items(owner))?;
            FragmentKind::Array(items)
        }
        other => return Err(Error::unsupported_type(owner, other)),
    };
    Ok(kind)
}

/// Resolve a fragment. Pure: the same fragment always yields the same result.
pub fn resolve(owner: &str, fragment: &SchemaFragment) -> Result<ResolvedType> {
    let format = fragment.format.as_deref();

    let resolved = match kind(owner, fragment)? {
        FragmentKind::Reference(name) => ResolvedType {
            display: name.to_string(),
            hydration: Some(HydrationTag::model(name)),
            format: None,
        },
        FragmentKind::String => match format {
            Some("date") => ResolvedType {
                display: "DateOnly".to_string(),
                hydration: Some(HydrationTag::Date),
                format: Some("date only".to_string()),
            },
            Some("date-time") => ResolvedType {
                display: "Date".to_string(),
                hydration: Some(HydrationTag::DateTime),
                format: Some("date and time".to_string()),
            },
            _ => ResolvedType {
                display: match &fragment.enum_values {
                    Some(values) if !values.is_empty() => literal_union(values),
                    _ => "string".to_string(),
                },
                hydration: Some(HydrationTag::String),
                format: format.map(str::to_string),
            },
        },
        FragmentKind::Number => ResolvedType {
            display: "number".to_string(),
            hydration: Some(HydrationTag::Float),
            format: format.map(str::to_string),
        },
        FragmentKind::Integer => ResolvedType {
            display: "number".to_string(),
            hydration: Some(HydrationTag::Integer),
            format: Some(format.unwrap_or("integer").to_string()),
        },
        FragmentKind::Boolean => ResolvedType {
            display: "boolean".to_string(),
            hydration: Some(HydrationTag::Boolean),
            format: None,
        },
        FragmentKind::Object => ResolvedType {
            display: "object".to_string(),
            hydration: Some(HydrationTag::Object),
            format: None,
        },
        FragmentKind::File => ResolvedType {
            display: "File".to_string(),
            hydration: None,
            format: None,
        },
        FragmentKind::Array(items) => {
            let item = resolve(owner, items)?;
            ResolvedType {
                display: format!("[{}]", item.display),
                hydration: item.hydration.map(HydrationTag::array),
                format: None,
            }
        }
    };
    Ok(resolved)
}

/// Model referenced by a fragment, directly or through nested arrays.
pub fn referenced_model(fragment: &SchemaFragment) -> Option<&str> {
    if let Some(reference) = &fragment.reference {
        return Some(reference_name(reference));
    }
    match fragment.ty.as_deref() {
        Some("array") => fragment.items.as_deref().and_then(referenced_model),
        _ => None,
    }
}

fn literal_union(values: &[String]) -> String {
    values
        .iter()
        .map(|value| quote(value))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(fragment: &SchemaFragment) -> String {
        resolve("Invoice.field", fragment).unwrap().display
    }

    #[test]
    fn test_reference() {
        let resolved = resolve("Invoice.customer", &SchemaFragment::reference("Customer")).unwrap();
        assert_eq!(resolved.display, "Customer");
        assert_eq!(resolved.hydration, Some(HydrationTag::model("Customer")));
        assert_eq!(resolved.format, None);
    }

    #[test]
    fn test_reference_outside_definitions() {
        let fragment = SchemaFragment {
            reference: Some("common.json#/Money".to_string()),
            ..SchemaFragment::default()
        };
        assert_eq!(display(&fragment), "Money");
    }

    #[test]
    fn test_date_formats() {
        let date = resolve("d", &SchemaFragment::primitive("string").with_format("date")).unwrap();
        assert_eq!(date.display, "DateOnly");
        assert_eq!(date.hydration, Some(HydrationTag::Date));
        assert_eq!(date.format.as_deref(), Some("date only"));

        let date_time =
            resolve("d", &SchemaFragment::primitive("string").with_format("date-time")).unwrap();
        assert_eq!(date_time.display, "Date");
        assert_eq!(date_time.hydration, Some(HydrationTag::DateTime));
        assert_eq!(date_time.format.as_deref(), Some("date and time"));
    }

    #[test]
    fn test_string_enum_is_literal_union() {
        let fragment = SchemaFragment::primitive("string").with_enum(["open", "closed"]);
        let resolved = resolve("Ticket.state", &fragment).unwrap();
        assert_eq!(resolved.display, "'open'|'closed'");
        assert_eq!(resolved.hydration, Some(HydrationTag::String));
    }

    #[test]
    fn test_date_format_wins_over_enum() {
        let fragment = SchemaFragment::primitive("string")
            .with_format("date")
            .with_enum(["2024-01-01"]);
        assert_eq!(display(&fragment), "DateOnly");
    }

    #[test]
    fn test_other_string_format_is_label() {
        let resolved =
            resolve("User.email", &SchemaFragment::primitive("string").with_format("email")).unwrap();
        assert_eq!(resolved.display, "string");
        assert_eq!(resolved.format.as_deref(), Some("email"));
    }

    #[test]
    fn test_numbers() {
        let number = resolve("n", &SchemaFragment::primitive("number")).unwrap();
        assert_eq!(number.display, "number");
        assert_eq!(number.hydration, Some(HydrationTag::Float));
        assert_eq!(number.format, None);

        let double = resolve("n", &SchemaFragment::primitive("number").with_format("double")).unwrap();
        assert_eq!(double.format.as_deref(), Some("double"));

        let integer = resolve("n", &SchemaFragment::primitive("integer")).unwrap();
        assert_eq!(integer.display, "number");
        assert_eq!(integer.hydration, Some(HydrationTag::Integer));
        assert_eq!(integer.format.as_deref(), Some("integer"));

        let long = resolve("n", &SchemaFragment::primitive("integer").with_format("int64")).unwrap();
        assert_eq!(long.format.as_deref(), Some("int64"));
    }

    #[test]
    fn test_boolean_object_file() {
        let boolean = resolve("b", &SchemaFragment::primitive("boolean")).unwrap();
        assert_eq!(
            (boolean.display.as_str(), boolean.hydration),
            ("boolean", Some(HydrationTag::Boolean))
        );

        let object = resolve("o", &SchemaFragment::primitive("object")).unwrap();
        assert_eq!(
            (object.display.as_str(), object.hydration),
            ("object", Some(HydrationTag::Object))
        );

        let file = resolve("f", &SchemaFragment::primitive("file")).unwrap();
        assert_eq!((file.display.as_str(), file.hydration), ("File", None));
    }

    #[test]
    fn test_array_wraps_item_at_any_depth() {
        let leaves = [
            SchemaFragment::primitive("string"),
            SchemaFragment::primitive("integer"),
            SchemaFragment::reference("Invoice"),
            SchemaFragment::primitive("string").with_format("date"),
            SchemaFragment::primitive("string").with_enum(["a", "b"]),
        ];

        for leaf in leaves {
            let mut fragment = leaf.clone();
            let mut expected = display(&leaf);
            let mut expected_tag = resolve("x", &leaf).unwrap().hydration;
            for _ in 0..4 {
                fragment = SchemaFragment::array(fragment);
                expected = format!("[{}]", expected);
                expected_tag = expected_tag.map(HydrationTag::array);

                let resolved = resolve("x", &fragment).unwrap();
                assert_eq!(resolved.display, expected);
                assert_eq!(resolved.hydration, expected_tag);
                assert_eq!(resolved.format, None);
            }
        }
    }

    #[test]
    fn test_array_of_files_has_no_tag() {
        let resolved = resolve("f", &SchemaFragment::array(SchemaFragment::primitive("file"))).unwrap();
        assert_eq!(resolved.display, "[File]");
        assert_eq!(resolved.hydration, None);
    }

    #[test]
    fn test_missing_type() {
        let err = resolve("Invoice.total", &SchemaFragment::default()).unwrap_err();
        assert!(matches!(*err, Error::MissingType { ref owner } if owner == "Invoice.total"));
    }

    #[test]
    fn test_unsupported_type() {
        let err = resolve("Invoice.total", &SchemaFragment::primitive("decimal")).unwrap_err();
        assert!(
            matches!(*err, Error::UnsupportedType { ref owner, ref ty } if owner == "Invoice.total" && ty == "decimal")
        );
    }

    #[test]
    fn test_array_without_items() {
        let err = resolve("Invoice.lines", &SchemaFragment::primitive("array")).unwrap_err();
        assert!(matches!(*err, Error::MissingArrayItems { .. }));

        let nested = SchemaFragment::array(SchemaFragment::primitive("array"));
        assert!(resolve("Invoice.lines", &nested).is_err());
    }

    #[test]
    fn test_referenced_model() {
        assert_eq!(
            referenced_model(&SchemaFragment::array(SchemaFragment::array(
                SchemaFragment::reference("Line")
            ))),
            Some("Line")
        );
        assert_eq!(referenced_model(&SchemaFragment::primitive("string")), None);
    }
}
