//! Core utilities and types for the oas-client code generator.
//!
//! This crate provides the generated-file abstraction and the string/path
//! helpers shared by every other crate in the workspace.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String and path utilities
pub use utils::{
    capitalize, lower_first, relative_import, to_camel_case, to_pascal_case, to_upper_snake_case,
};
