//! Shared code generation utilities for the oas-client code generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generator (`oas-codegen-javascript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
