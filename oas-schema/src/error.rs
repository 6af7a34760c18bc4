use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for oas-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and its name (file path or URL), so parse
/// errors can point at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    name: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            name: name.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.src.clone())
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }

    /// Create a parse error from a YAML error.
    pub fn yaml_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source
            .location()
            .map(|location| SourceSpan::from(location.index()));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document")]
    #[diagnostic(code(oas::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to fetch schema document from '{url}'")]
    #[diagnostic(code(oas::fetch_error), help("{message}"))]
    Fetch { url: String, message: String },

    #[error("oas-client is not initialized: '{}' not found", path.display())]
    #[diagnostic(
        code(oas::not_initialized),
        help("run 'oas-client init <URL>' to create a configuration")
    )]
    NotInitialized { path: PathBuf },

    #[error("corrupt or missing oas-client configuration in '{}'", path.display())]
    #[diagnostic(code(oas::invalid_config), help("{message}"))]
    InvalidConfig { path: PathBuf, message: String },

    #[error("property {owner}: no type defined")]
    #[diagnostic(
        code(oas::missing_type),
        help("add a 'type' or a '$ref' to the property definition")
    )]
    MissingType { owner: String },

    #[error("property {owner}: type \"{ty}\" is not supported")]
    #[diagnostic(
        code(oas::unsupported_type),
        help("supported types are: string, number, integer, boolean, object, file, array")
    )]
    UnsupportedType { owner: String, ty: String },

    #[error("property {owner}: array has no items defined")]
    #[diagnostic(code(oas::missing_items))]
    MissingArrayItems { owner: String },

    #[error("definition '{name}' is not an object schema (type \"{ty}\")")]
    #[diagnostic(
        code(oas::non_object_model),
        help("only object definitions can be turned into model classes")
    )]
    NonObjectModel { name: String, ty: String },

    #[error("{method} {path}: operationId is missing")]
    #[diagnostic(
        code(oas::missing_operation_id),
        help("every operation needs an operationId of the form 'Namespace::OperationName'")
    )]
    MissingOperationId { method: String, path: String },

    #[error("{method} {path}: operationId '{operation_id}' is malformed")]
    #[diagnostic(
        code(oas::malformed_operation_id),
        help("operationId must split into exactly two '::'-delimited parts, e.g. 'Billing::ListInvoices'")
    )]
    MalformedOperationId {
        operation_id: String,
        method: String,
        path: String,
    },

    #[error("{operation}: {reason}")]
    #[diagnostic(
        code(oas::conflicting_payload),
        help("an operation can carry either formData parameters or a single body parameter")
    )]
    ConflictingPayload { operation: String, reason: String },

    #[error("{operation}: parameters '{first}' and '{second}' both map to identifier '{identifier}'")]
    #[diagnostic(
        code(oas::duplicate_parameter),
        help("rename one of the parameters so their camelCase identifiers differ")
    )]
    DuplicateParameter {
        operation: String,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("namespaces '{first}' and '{second}' both map to client '{client}'")]
    #[diagnostic(
        code(oas::namespace_collision),
        help("use one spelling of the namespace across every operationId")
    )]
    NamespaceCollision {
        client: String,
        first: String,
        second: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Fetch {
            url: url.into(),
            message: message.into(),
        })
    }

    pub fn missing_type(owner: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingType {
            owner: owner.into(),
        })
    }

    pub fn unsupported_type(owner: impl Into<String>, ty: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedType {
            owner: owner.into(),
            ty: ty.into(),
        })
    }

    pub fn missing_array_items(owner: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingArrayItems {
            owner: owner.into(),
        })
    }

    pub fn non_object_model(name: impl Into<String>, ty: impl Into<String>) -> Box<Self> {
        Box::new(Error::NonObjectModel {
            name: name.into(),
            ty: ty.into(),
        })
    }

    pub fn missing_operation_id(method: impl Into<String>, path: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingOperationId {
            method: method.into(),
            path: path.into(),
        })
    }

    pub fn malformed_operation_id(
        operation_id: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::MalformedOperationId {
            operation_id: operation_id.into(),
            method: method.into(),
            path: path.into(),
        })
    }

    pub fn conflicting_payload(
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::ConflictingPayload {
            operation: operation.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_parameter(
        operation: impl Into<String>,
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::DuplicateParameter {
            operation: operation.into(),
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        })
    }

    pub fn namespace_collision(
        client: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::NamespaceCollision {
            client: client.into(),
            first: first.into(),
            second: second.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n  \"b\": x\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 3, 8), Some(src.find('x').unwrap()));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = Error::malformed_operation_id("ListInvoices", "GET", "/invoices");
        assert_eq!(
            err.to_string(),
            "GET /invoices: operationId 'ListInvoices' is malformed"
        );

        let err = Error::missing_array_items("Invoice.lines");
        assert_eq!(err.to_string(), "property Invoice.lines: array has no items defined");
    }
}
