#![forbid(unsafe_code)]
//! Shared protocol constants and the registry/result data model of the endpoint.

mod constants;
mod diagnostics;
mod entry;
mod registry;
mod results;

pub use constants::*;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use entry::ResultEntry;
pub use registry::{RegistryError, ResourceRegistry};
pub use results::ResultSet;
