//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod codegen;
mod init;
mod output;

pub use check::CheckReport;
pub use codegen::{CodegenReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
