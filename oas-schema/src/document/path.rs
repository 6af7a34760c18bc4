//! Path items, operations, parameters and responses.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{IgnoredAny, MapAccess, Visitor},
};

use super::SchemaFragment;

/// HTTP methods an operation can be declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Parse a path item key (`get`, `post`, ...). Other keys are not methods.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(Self::Get),
            "put" => Some(Self::Put),
            "post" => Some(Self::Post),
            "delete" => Some(Self::Delete),
            "options" => Some(Self::Options),
            "head" => Some(Self::Head),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }

    /// Upper-case verb as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything declared under one entry of `paths`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// Parameters shared by every operation of the path.
    pub parameters: Vec<Parameter>,
    /// Operations in document order.
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a path item object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut item = PathItem::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "parameters" {
                        item.parameters = map.next_value()?;
                    } else if let Some(method) = HttpMethod::from_key(&key) {
                        let operation: Operation = map.next_value()?;
                        item.operations.insert(method, operation);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(item)
            }
        }

        deserializer.deserialize_map(PathItemVisitor)
    }
}

/// One method of one path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Operation {
    /// `Namespace::OperationName`.
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Status code (or `default`) to response, in document order.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Where a parameter travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Path,
    FormData,
    Body,
    Header,
    #[serde(other)]
    Unsupported,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::FormData => "formData",
            Self::Body => "body",
            Self::Header => "header",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub required: bool,

    /// Body parameters describe their payload under `schema`.
    #[serde(default)]
    pub schema: Option<SchemaFragment>,

    /// Every other location describes itself inline.
    #[serde(flatten)]
    pub inline: SchemaFragment,
}

impl Parameter {
    /// The fragment describing the parameter's value.
    pub fn fragment(&self) -> &SchemaFragment {
        self.schema.as_ref().unwrap_or(&self.inline)
    }

    pub fn description(&self) -> Option<&str> {
        self.inline
            .description
            .as_deref()
            .or_else(|| self.schema.as_ref()?.description.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub schema: Option<SchemaFragment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_item_keeps_method_order_and_skips_extensions() {
        let item: PathItem = serde_json::from_str(
            r#"{
                "x-internal": true,
                "post": { "operationId": "Billing::CreateInvoice" },
                "parameters": [{ "name": "tenant", "in": "query", "type": "string" }],
                "get": { "operationId": "Billing::ListInvoices" }
            }"#,
        )
        .unwrap();

        let methods: Vec<_> = item.operations.keys().copied().collect();
        assert_eq!(methods, [HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(item.parameters.len(), 1);
        assert_eq!(item.parameters[0].location, ParameterLocation::Query);
    }

    #[test]
    fn test_body_parameter_uses_schema() {
        let parameter: Parameter = serde_json::from_str(
            r##"{
                "name": "invoice",
                "in": "body",
                "required": true,
                "description": "Invoice to create",
                "schema": { "$ref": "#/definitions/Invoice" }
            }"##,
        )
        .unwrap();

        assert_eq!(parameter.location, ParameterLocation::Body);
        assert!(parameter.required);
        assert_eq!(parameter.fragment(), &SchemaFragment::reference("Invoice"));
        assert_eq!(parameter.description(), Some("Invoice to create"));
    }

    #[test]
    fn test_inline_parameter_fragment() {
        let parameter: Parameter = serde_json::from_str(
            r#"{ "name": "customer_id", "in": "path", "type": "integer", "format": "int64" }"#,
        )
        .unwrap();

        assert_eq!(
            parameter.fragment(),
            &SchemaFragment::primitive("integer").with_format("int64")
        );
    }

    #[test]
    fn test_unknown_location_is_unsupported() {
        let parameter: Parameter =
            serde_json::from_str(r#"{ "name": "session", "in": "cookie", "type": "string" }"#)
                .unwrap();
        assert_eq!(parameter.location, ParameterLocation::Unsupported);
    }

    #[test]
    fn test_responses_keep_document_order() {
        let operation: Operation = serde_json::from_str(
            r#"{
                "responses": {
                    "404": { "description": "Not found" },
                    "200": { "description": "OK", "schema": { "type": "string" } },
                    "default": { "description": "Error" }
                }
            }"#,
        )
        .unwrap();

        let statuses: Vec<_> = operation.responses.keys().collect();
        assert_eq!(statuses, ["404", "200", "default"]);
    }
}
