//! Shared renderer for mock data modules.
//!
//! Both pipelines emit the same shape: a header comment, an exported array
//! literal of records, a block of exported helper functions over that array,
//! and a default export. [`ModuleSpec`] parameterizes the names and helpers;
//! [`RenderRecord`] supplies each record's ordered fields.

pub mod errors;
pub mod helpers;
pub mod literal;
pub mod module;
pub mod records;

pub use errors::RenderError;
pub use helpers::{Helper, Key};
pub use literal::{JsValue, quote_str};
pub use module::{ModuleSpec, RenderRecord, render_module};
pub use records::{customer_module, saving_book_module};
