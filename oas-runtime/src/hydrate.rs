//! Conversion of generic JSON objects into hydrated models.

use serde_json::Map;

use crate::{
    FactoryRegistry, HydrationTable, HydrationTag, ModelInstance, Result, Value,
    dates::{from_epoch_millis, parse_date, parse_date_time},
};

/// Populate `instance` from `generic` following `table`.
///
/// Keys missing from `generic` are skipped, explicit `null` stays `null` and
/// everything else is converted with its tag. Nested models are built through
/// `registry`, which is the only place concrete model names are known.
pub fn hydrate(
    instance: &mut ModelInstance,
    table: &HydrationTable,
    generic: &Map<String, serde_json::Value>,
    registry: &FactoryRegistry,
) -> Result<()> {
    for (name, tag) in table.iter() {
        let Some(raw) = generic.get(name) else {
            continue;
        };
        let value = hydrate_property(tag, raw, registry)?;
        instance.set(name, value);
    }
    Ok(())
}

/// Convert a single raw value with `tag`.
pub fn hydrate_property(
    tag: &HydrationTag,
    raw: &serde_json::Value,
    registry: &FactoryRegistry,
) -> Result<Value> {
    use serde_json::Value as Json;

    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match tag {
        HydrationTag::Array(item) => match raw {
            Json::Array(elements) => Value::Array(
                elements
                    .iter()
                    .map(|element| hydrate_property(item, element, registry))
                    .collect::<Result<_>>()?,
            ),
            _ => Value::Undefined,
        },
        HydrationTag::String => match raw {
            Json::String(s) => Value::String(s.clone()),
            other => Value::Json(other.clone()),
        },
        HydrationTag::Date => raw
            .as_str()
            .and_then(parse_date)
            .map_or(Value::Undefined, Value::Date),
        HydrationTag::DateTime => match raw {
            Json::String(s) => parse_date_time(s).map_or(Value::Undefined, Value::DateTime),
            Json::Number(n) => n
                .as_i64()
                .and_then(from_epoch_millis)
                .map_or(Value::Undefined, Value::DateTime),
            _ => Value::Undefined,
        },
        HydrationTag::Float => Value::Float(to_float(raw)),
        HydrationTag::Integer => to_integer(raw).map_or(Value::Undefined, Value::Integer),
        HydrationTag::Boolean => Value::Boolean(is_truthy(raw)),
        HydrationTag::Object => Value::Json(raw.clone()),
        HydrationTag::Model(name) => registry.create_by_class_name(name, raw)?,
    };
    Ok(value)
}

/// Floating-point reading of a raw value; `NaN` when there is none.
fn to_float(raw: &serde_json::Value) -> f64 {
    match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => leading_number(s, true)
            .and_then(|prefix| prefix.parse().ok())
            .unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Integer reading of a raw value; fractions are truncated.
fn to_integer(raw: &serde_json::Value) -> Option<i64> {
    match raw {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        serde_json::Value::String(s) => leading_number(s, false)?.parse().ok(),
        _ => None,
    }
}

/// Longest numeric prefix of `s` after leading whitespace (`"12px"` -> `"12"`).
fn leading_number(s: &str, fractional: bool) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if fractional && end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let digits = &s[digits_start..end];
    if digits.is_empty() || digits == "." {
        return None;
    }
    Some(&s[..end])
}

fn is_truthy(raw: &serde_json::Value) -> bool {
    match raw {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
