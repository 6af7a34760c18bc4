//! Model hydration runtime.
//!
//! Rebuilds typed object graphs from generic JSON using the same contract the
//! generated JavaScript models follow: a per-model hydration table of
//! `(property, tag)` pairs plus a dispatcher that knows every model by name.
//! The code generator uses [`HydrationTag`] to write those tables.

pub mod dates;
mod error;
mod hydrate;
mod registry;
mod table;
mod tag;
mod value;

pub use error::{HydrationError, Result};
pub use hydrate::{hydrate, hydrate_property};
pub use registry::{Factory, FactoryRegistry, ModelClass};
pub use table::HydrationTable;
pub use tag::HydrationTag;
pub use value::{ModelInstance, Value};
