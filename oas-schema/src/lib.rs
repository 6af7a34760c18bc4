//! Swagger 2.0 documents and project configuration for oas-client.
//!
//! This crate owns everything the generator reads: the schema document
//! (parsed from JSON or YAML), the `oas-client.json` configuration and the
//! typed errors raised when either is unusable.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod document;
mod error;

pub use config::OasConfig;
pub use document::{
    Document, HttpMethod, Info, ObjectSchema, Operation, Parameter, ParameterLocation, PathItem,
    Response, SchemaFragment, SourceFormat, parse_document,
};
pub use error::{Error, Result, SourceContext};
