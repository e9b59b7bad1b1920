#![forbid(unsafe_code)]
//! Request-side wiring of the FCS endpoint: parameter resolution, query
//! translation and the searchRetrieve operation against the Solr backend.

mod config;
mod engine;
mod error;
mod request;
mod resolve;

pub use config::EndpointConfig;
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use request::{SearchRequest, QUERY_TYPE_CQL};
pub use resolve::{resolve_data_views, resolve_resources};
