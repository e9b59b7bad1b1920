#![forbid(unsafe_code)]
//! Solr backend client and the two-phase probe/fetch search orchestration.

mod client;
mod config;
mod error;
mod response;

pub use client::{entries_from_response, SolrClient};
pub use config::SolrConfig;
pub use error::{Result, SolrError};
pub use response::{SolrDoc, SolrResponse, SolrSelectResponse};
