//! JavaScript AST builders for classes, statements, imports and exports.
//!
//! These provide a high-level API for constructing ES module syntax,
//! which is then rendered via CodeBuilder.

mod chain;
mod class;
mod consts;
mod doc;
mod exports;
mod imports;
mod literal;
mod objects;
mod stmt;

pub use chain::Chain;
pub use class::{Class, Field, Method};
pub use consts::Const;
pub use doc::JsDoc;
pub use exports::Export;
pub use imports::Import;
pub use literal::quote;
pub use objects::JsObject;
pub use stmt::{Case, Stmt, Switch};
