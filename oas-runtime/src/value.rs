use chrono::{DateTime, FixedOffset, NaiveDate};
use indexmap::IndexMap;

/// A hydrated property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The conversion could not produce a value (e.g. an array tag given a
    /// non-array). Properties absent from the source are simply not set.
    Undefined,
    Null,
    String(String),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    Float(f64),
    Integer(i64),
    Boolean(bool),
    /// Raw JSON kept as-is (`object` tag, non-string `string` values).
    Json(serde_json::Value),
    Array(Vec<Value>),
    Model(ModelInstance),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&ModelInstance> {
        match self {
            Self::Model(instance) => Some(instance),
            _ => None,
        }
    }
}

/// A model built from a generic object: its class name and the properties
/// set during hydration, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    class_name: String,
    properties: IndexMap<String, Value>,
}

impl ModelInstance {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Property value, `None` when the source object did not carry it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
