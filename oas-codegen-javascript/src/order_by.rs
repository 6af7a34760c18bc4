//! `OrderBy*` constants read from a `resultParameter` description.
//!
//! Some schemas document the sortable fields of a result set as a property
//! named `resultParameter` whose description is a bracketed list such as
//! `[name, createdAt]`. Each entry becomes a static constant on the model base
//! class (`InvoiceBase.OrderByName = 'name';`). Nothing else triggers it.

use oas_core::capitalize;

use crate::naming::identifier_chars;

/// Name of the property that carries the list.
pub const RESULT_PARAMETER: &str = "resultParameter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByConstant {
    /// `OrderBy<Token>`
    pub name: String,
    /// Token lower-cased.
    pub value: String,
}

/// Constants for one property; empty unless the property is exactly
/// `resultParameter` and its trimmed description is wrapped in `[...]`.
pub fn order_by_constants(property: &str, description: Option<&str>) -> Vec<OrderByConstant> {
    if property != RESULT_PARAMETER {
        return Vec::new();
    }
    let Some(inner) = description
        .map(str::trim)
        .and_then(|d| d.strip_prefix('['))
        .and_then(|d| d.strip_suffix(']'))
    else {
        return Vec::new();
    };

    inner
        .split(',')
        .map(str::trim)
        .filter_map(|token| {
            let identifier = identifier_chars(token);
            if identifier.is_empty() {
                return None;
            }
            Some(OrderByConstant {
                name: format!("OrderBy{}", capitalize(&identifier)),
                value: token.to_lowercase(),
            })
        })
        .collect()
}
