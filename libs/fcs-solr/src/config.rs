use gazette_model::{HIT_CLOSE, HIT_OPEN};
use serde::Deserialize;

/// Tunables for the Solr select handler this endpoint queries.
///
/// The defaults describe the newspaper-issues index of the production
/// backend; deployments override them through configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolrConfig {
    /// Full URL of the select handler.
    pub select_url: String,
    /// Field searched when the query names none.
    pub default_field: String,
    /// Full-text field highlighting runs on.
    pub highlight_field: String,
    /// Stored fields requested per document.
    pub field_list: String,
    pub fragment_size: u32,
    pub boundary_scanner: String,
    pub highlight_method: String,
    /// Marker pair the backend wraps matched spans in.
    pub hit_open: String,
    pub hit_close: String,
    pub connect_timeout_secs: u64,
    /// Cap on simultaneous outbound calls across all requests.
    pub max_concurrent_requests: usize,
    /// Cap on pooled connections per backend host.
    pub max_idle_per_host: usize,
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            select_url:
                "https://api.deutsche-digitale-bibliothek.de/search/index/newspaper-issues/select"
                    .to_string(),
            default_field: "plainpagefulltext".to_string(),
            highlight_field: "plainpagefulltext".to_string(),
            field_list: "id,paper_title,pagenumber".to_string(),
            fragment_size: 512,
            boundary_scanner: "SENTENCE".to_string(),
            highlight_method: "fastVector".to_string(),
            hit_open: HIT_OPEN.to_string(),
            hit_close: HIT_CLOSE.to_string(),
            connect_timeout_secs: 180,
            max_concurrent_requests: 16,
            max_idle_per_host: 16,
        }
    }
}
