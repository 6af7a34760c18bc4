//! In-memory Swagger 2.0 document.

mod parse;
mod path;
mod schema;

use indexmap::IndexMap;
pub use parse::{SourceFormat, parse_document};
pub use path::{HttpMethod, Operation, Parameter, ParameterLocation, PathItem, Response};
pub use schema::{ObjectSchema, SchemaFragment};
use serde::Deserialize;

/// Root of a schema document.
///
/// Only the members the generator consumes are modelled; anything else in the
/// source is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// Declared version, `"2.0"` for Swagger documents.
    #[serde(default)]
    pub swagger: Option<String>,

    #[serde(default)]
    pub info: Info,

    /// Named object definitions, in document order.
    #[serde(default)]
    pub definitions: IndexMap<String, ObjectSchema>,

    /// Path templates, in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Document {
    /// Number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations.len()).sum()
    }
}
