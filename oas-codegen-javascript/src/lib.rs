//! JavaScript code generator for oas-client.
//!
//! Turns a Swagger 2.0 [`Document`](oas_schema::Document) into ES modules
//! documented with JSDoc: model classes, enumeration constants, a model proxy,
//! per-namespace API clients and the `ApiClient` facade.
//!
//! # Usage
//!
//! ```ignore
//! use oas_codegen::LanguageCodegen;
//! use oas_codegen_javascript::{GenerationContext, Generator};
//! use oas_schema::Document;
//! use std::path::Path;
//!
//! let document = Document::from_file("swagger.json")?;
//! let generator = Generator::new(&document, GenerationContext::default());
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! Relative to the configured models and clients directories:
//!
//! - `<models>/<Name>.js` - user-owned model, created once
//! - `<models>/base/<Name>Base.js` - generated properties and hydration
//! - `<models>/enum/<Model><Property>Enum.js` - frozen enumeration constants
//! - `<models>/ModelProxyClass.js` - factory by model name
//! - `<clients>/<Namespace>Client.js` - user-owned client, created once
//! - `<clients>/base/<Namespace>ClientBase.js` - generated request methods
//! - `<clients>/ApiClient.js` - one singleton per namespace
//! - `ModelBaseClass.js`, `DateOnly.js`, `ClientBaseClass.js` - runtime, created once

mod aggregate;
mod code_file;
mod context;
mod enums;
mod generator;
mod model;
mod naming;
mod operations;
mod order_by;
mod proxy;
mod resolver;

pub mod ast;
pub mod client;
pub mod files;

pub use code_file::{CodeFile, GENERATED_HEADER};
pub use context::GenerationContext;
pub use generator::{Generator, Plan};
pub use naming::JS_NAMING;
pub use oas_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use resolver::{ResolvedType, resolve};
