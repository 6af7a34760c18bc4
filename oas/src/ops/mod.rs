//! Core operations.
//!
//! This module contains the business logic for oas-client commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod codegen;
pub mod init;
pub mod load;

pub use check::check;
pub use codegen::{CodegenOptions, codegen};
pub use init::{InitOptions, init};
pub use load::load_document;
