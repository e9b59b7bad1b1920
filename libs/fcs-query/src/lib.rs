#![forbid(unsafe_code)]
//! CQL boolean-tree AST and its translation into the Solr query syntax.

mod ast;
mod error;
mod translate;

pub use ast::{Modifier, QueryNode, SERVER_CHOICE_INDEX};
pub use error::{QueryError, Result};
pub use translate::to_solr;
