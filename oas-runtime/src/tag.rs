//! Hydration tags: the per-property conversion rule of a hydration table.

use std::{fmt, str::FromStr};

use crate::HydrationError;

/// Conversion applied to one raw JSON value.
///
/// The textual form (`string`, `datetime`, `[Invoice]`, ...) is exactly what
/// generated model bases carry in their hydration tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HydrationTag {
    String,
    Date,
    DateTime,
    Float,
    Integer,
    Boolean,
    Object,
    /// `[T]`: convert every element with `T`.
    Array(Box<HydrationTag>),
    /// Any other name: a nested model built through the dispatcher.
    Model(String),
}

impl HydrationTag {
    pub fn array(item: HydrationTag) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    /// The model name this tag eventually dispatches to, looking through arrays.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Self::Model(name) => Some(name),
            Self::Array(item) => item.model_name(),
            _ => None,
        }
    }
}

impl fmt::Display for HydrationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Date => f.write_str("date"),
            Self::DateTime => f.write_str("datetime"),
            Self::Float => f.write_str("float"),
            Self::Integer => f.write_str("integer"),
            Self::Boolean => f.write_str("boolean"),
            Self::Object => f.write_str("object"),
            Self::Array(item) => write!(f, "[{}]", item),
            Self::Model(name) => f.write_str(name),
        }
    }
}

impl FromStr for HydrationTag {
    type Err = HydrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(inner) = s.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| HydrationError::InvalidTag(s.to_string()))?;
            return Ok(Self::array(inner.parse()?));
        }

        let tag = match s {
            "" => return Err(HydrationError::InvalidTag(s.to_string())),
            "string" => Self::String,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "float" => Self::Float,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "object" => Self::Object,
            name if name.contains([']', '[']) => {
                return Err(HydrationError::InvalidTag(s.to_string()));
            }
            name => Self::model(name),
        };
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        assert_eq!("string".parse(), Ok(HydrationTag::String));
        assert_eq!("date".parse(), Ok(HydrationTag::Date));
        assert_eq!("datetime".parse(), Ok(HydrationTag::DateTime));
        assert_eq!("float".parse(), Ok(HydrationTag::Float));
        assert_eq!("integer".parse(), Ok(HydrationTag::Integer));
        assert_eq!("boolean".parse(), Ok(HydrationTag::Boolean));
        assert_eq!("object".parse(), Ok(HydrationTag::Object));
    }

    #[test]
    fn test_parse_nested_arrays_and_models() {
        let tag: HydrationTag = "[[Invoice]]".parse().unwrap();
        assert_eq!(
            tag,
            HydrationTag::array(HydrationTag::array(HydrationTag::model("Invoice")))
        );
        assert_eq!(tag.model_name(), Some("Invoice"));
        assert_eq!(tag.to_string(), "[[Invoice]]");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<HydrationTag>().is_err());
        assert!("[string".parse::<HydrationTag>().is_err());
        assert!("[]".parse::<HydrationTag>().is_err());
        assert!("Invoice]".parse::<HydrationTag>().is_err());
    }

    #[test]
    fn test_model_name_of_primitive_is_none() {
        assert_eq!(HydrationTag::array(HydrationTag::Date).model_name(), None);
    }
}
