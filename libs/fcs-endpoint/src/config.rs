use gazette_solr::SolrConfig;
use serde::Deserialize;

/// Deployment configuration of the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Resource searched when a request names none.
    pub default_resource_pid: String,
    pub solr: SolrConfig,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            default_resource_pid: String::new(),
            solr: SolrConfig::default(),
        }
    }
}
