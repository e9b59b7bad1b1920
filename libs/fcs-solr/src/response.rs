use serde::Deserialize;
use std::collections::HashMap;

/// Top-level Solr select response. Field names are the backend's contract.
#[derive(Debug, Deserialize)]
pub struct SolrSelectResponse {
    pub response: SolrResponse,
    /// Per-document-id mapping to per-field highlight fragments.
    #[serde(default)]
    pub highlighting: HashMap<String, HashMap<String, Vec<String>>>,
}

/// The `response` block: total match count and the fetched document window.
#[derive(Debug, Deserialize)]
pub struct SolrResponse {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<SolrDoc>,
}

/// One stored document row. The backend may return incomplete rows; every
/// field is optional here and validated during entry assembly.
#[derive(Debug, Default, Deserialize)]
pub struct SolrDoc {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub paper_title: Option<String>,
    #[serde(default)]
    pub pagenumber: Option<String>,
}
