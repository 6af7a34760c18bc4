//! Object definitions and property fragments.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A named entry of the document's `definitions` map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectSchema {
    /// Declared type; object definitions may omit it.
    #[serde(rename = "type", default)]
    pub ty: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Properties in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, SchemaFragment>,

    #[serde(default)]
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// Whether the definition describes an object.
    ///
    /// A definition without a `type` but with properties is treated as an
    /// object, which is how most hand-written documents declare them.
    pub fn is_object(&self) -> bool {
        match self.ty.as_deref() {
            Some(ty) => ty == "object",
            None => true,
        }
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }
}

/// The raw description of one property, parameter or response body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaFragment {
    /// `$ref` pointer, usually `#/definitions/<Name>`.
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,

    #[serde(rename = "type", default)]
    pub ty: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    /// Allowed literals, stringified when the document lists numbers or booleans.
    #[serde(rename = "enum", default, deserialize_with = "deserialize_literals")]
    pub enum_values: Option<Vec<String>>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub items: Option<Box<SchemaFragment>>,
}

impl SchemaFragment {
    /// Fragment with just a `type`.
    pub fn primitive(ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Fragment pointing at `#/definitions/<name>`.
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/definitions/{}", name)),
            ..Self::default()
        }
    }

    /// `array` fragment wrapping `items`.
    pub fn array(items: SchemaFragment) -> Self {
        Self {
            ty: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the fragment carries no type information at all.
    pub fn is_empty(&self) -> bool {
        self.reference.is_none() && self.ty.is_none() && self.items.is_none()
    }
}

fn deserialize_literals<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter(|value| !value.is_null())
            .map(|value| match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect()
    }))
}
