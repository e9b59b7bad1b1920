#![forbid(unsafe_code)]
//! Forward-only result cursor and FCS record serialization.

mod cursor;
mod error;
mod fragment;

pub use cursor::{effective_record_schema, schema_surrogate_diagnostic, ResultCursor};
pub use error::{HitsError, Result};
