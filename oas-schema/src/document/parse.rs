//! Document parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Document;
use crate::{Error, Result, error::SourceContext};

/// Serialization of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Guess the format from a file name or URL.
    ///
    /// `.yaml` and `.yml` are YAML; everything else is tried as JSON.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        let path = lower.split(['?', '#']).next().unwrap_or_default();
        if path.ends_with(".yaml") || path.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "swagger.json", SourceFormat::Json)
    }
}

impl Document {
    /// Parse a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let name = path.display().to_string();
        let format = SourceFormat::from_name(&name);
        parse_document(&content, &name, format)
    }

    /// Parse a schema document with a custom name for error reporting.
    ///
    /// The format is picked from the name's extension.
    pub fn from_source(content: &str, name: &str) -> Result<Self> {
        parse_document(content, name, SourceFormat::from_name(name))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        parse_document(content, "swagger.yaml", SourceFormat::Yaml)
    }
}

/// Parse a document from content with the given name for error reporting.
pub fn parse_document(content: &str, name: &str, format: SourceFormat) -> Result<Document> {
    let source_ctx = SourceContext::new(content, name);
    match format {
        SourceFormat::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e)),
        SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|e| source_ctx.yaml_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{HttpMethod, ParameterLocation};

    const BILLING_JSON: &str = r##"{
        "swagger": "2.0",
        "info": { "title": "Billing", "version": "1.0" },
        "definitions": {
            "Invoice": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "dueDate": { "type": "string", "format": "date" }
                }
            }
        },
        "paths": {
            "/customers/{customer_id}/invoices": {
                "get": {
                    "operationId": "Billing::ListInvoices",
                    "parameters": [
                        { "name": "customer_id", "in": "path", "required": true, "type": "integer" }
                    ],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "schema": { "type": "array", "items": { "$ref": "#/definitions/Invoice" } }
                        },
                        "404": { "description": "Not found" }
                    }
                }
            }
        }
    }"##;

    #[test]
    fn test_parse_json_document() {
        let document: Document = BILLING_JSON.parse().unwrap();

        assert_eq!(document.swagger.as_deref(), Some("2.0"));
        assert_eq!(document.info.title.as_deref(), Some("Billing"));
        assert!(document.definitions.contains_key("Invoice"));
        assert_eq!(document.operation_count(), 1);

        let item = &document.paths["/customers/{customer_id}/invoices"];
        let operation = &item.operations[&HttpMethod::Get];
        assert_eq!(
            operation.operation_id.as_deref(),
            Some("Billing::ListInvoices")
        );
        assert_eq!(operation.parameters[0].location, ParameterLocation::Path);
    }

    #[test]
    fn test_parse_yaml_document() {
        let yaml = r##"
swagger: "2.0"
definitions:
  Invoice:
    type: object
    properties:
      status:
        type: string
        enum: [draft, inProgress]
paths:
  /invoices:
    get:
      operationId: Billing::ListInvoices
      responses:
        "200":
          description: OK
"##;
        let document = Document::from_yaml(yaml).unwrap();

        let status = &document.definitions["Invoice"].properties["status"];
        assert_eq!(
            status.enum_values,
            Some(vec!["draft".to_string(), "inProgress".to_string()])
        );
        assert_eq!(document.operation_count(), 1);
    }

    #[test]
    fn test_parse_error_is_reported_with_source() {
        let err = Document::from_source("{ \"definitions\": [", "broken.json").unwrap_err();
        match *err {
            Error::Parse { ref src, .. } => assert_eq!(src.name(), "broken.json"),
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "swagger: \"2.0\"\ndefinitions: {{}}").unwrap();

        let document = Document::from_file(file.path()).unwrap();
        assert_eq!(document.swagger.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Document::from_file("/definitely/not/here/swagger.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_source_format_from_name() {
        assert_eq!(SourceFormat::from_name("api.yaml"), SourceFormat::Yaml);
        assert_eq!(
            SourceFormat::from_name("https://example.com/api.YML?v=2"),
            SourceFormat::Yaml
        );
        assert_eq!(SourceFormat::from_name("swagger.json"), SourceFormat::Json);
        assert_eq!(SourceFormat::from_name("https://example.com/docs"), SourceFormat::Json);
    }
}
