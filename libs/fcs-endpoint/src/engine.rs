use crate::config::EndpointConfig;
use crate::error::{Error, Result};
use crate::request::{SearchRequest, QUERY_TYPE_CQL};
use crate::resolve::{resolve_data_views, resolve_resources};
use gazette_hits::ResultCursor;
use gazette_model::{Diagnostics, ResourceRegistry, X_FCS_CONTEXT, X_FCS_DATAVIEWS};
use gazette_query::to_solr;
use gazette_solr::SolrClient;
use std::sync::Arc;

/// The searchRetrieve pipeline: query translation, parameter resolution and
/// the two-phase backend search. One instance serves all requests.
pub struct SearchEngine {
    registry: Arc<ResourceRegistry>,
    solr: SolrClient,
}

impl SearchEngine {
    pub fn new(registry: Arc<ResourceRegistry>, solr: SolrClient) -> Self {
        Self { registry, solr }
    }

    /// Build the engine from the endpoint's resource inventory and its
    /// deployment configuration.
    pub fn from_inventory<I, D, S>(inventory: I, config: EndpointConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (S, D)>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = ResourceRegistry::new(inventory, config.default_resource_pid)?;
        tracing::info!(
            resources = registry.len(),
            default = registry.default_resource(),
            "resource registry loaded"
        );
        let solr = SolrClient::new(config.solr)?;
        Ok(Self::new(Arc::new(registry), solr))
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Run one searchRetrieve request.
    ///
    /// Non-fatal problems (unknown pids, undeclared data views) go into
    /// `diagnostics` and the search continues; fatal problems abort with an
    /// [`Error`] carrying the SRU code the response must answer with.
    pub async fn search(
        &self,
        request: &impl SearchRequest,
        diagnostics: &mut Diagnostics,
    ) -> Result<ResultCursor> {
        let solr_query = self.translate_query(request)?;

        let pids = resolve_resources(
            &self.registry,
            request.extra_param(X_FCS_CONTEXT),
            diagnostics,
        )?;
        let pid = &pids[0];

        let views = resolve_data_views(
            &self.registry,
            pid,
            request.extra_param(X_FCS_DATAVIEWS),
            diagnostics,
        );

        // SRU positions are 1-based; values below 1 are clamped up to 1.
        let offset = u64::from(request.start_record().max(1) - 1);
        tracing::debug!(pid = %pid, offset, query = %solr_query, "dispatching search");

        let results = self
            .solr
            .execute(pid, &solr_query, offset, request.maximum_records())
            .await?;

        Ok(ResultCursor::new(results, views))
    }

    fn translate_query(&self, request: &impl SearchRequest) -> Result<String> {
        if request.query_type() != QUERY_TYPE_CQL {
            return Err(Error::UnsupportedQuery(format!(
                "queries with queryType '{}' are not supported by this endpoint",
                request.query_type()
            )));
        }
        let solr_query = to_solr(request.query())?;
        tracing::debug!(query = %solr_query, "query translated");
        Ok(solr_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_query::QueryNode;
    use std::collections::HashMap;

    struct MockRequest {
        query: QueryNode,
        query_type: &'static str,
        params: HashMap<&'static str, &'static str>,
        start_record: u32,
    }

    impl MockRequest {
        fn cql(query: QueryNode) -> Self {
            Self {
                query,
                query_type: QUERY_TYPE_CQL,
                params: HashMap::new(),
                start_record: 1,
            }
        }

        fn with_param(mut self, name: &'static str, value: &'static str) -> Self {
            self.params.insert(name, value);
            self
        }
    }

    impl SearchRequest for MockRequest {
        fn query(&self) -> &QueryNode {
            &self.query
        }

        fn query_type(&self) -> &str {
            self.query_type
        }

        fn extra_param(&self, name: &str) -> Option<&str> {
            self.params.get(name).copied()
        }

        fn start_record(&self) -> u32 {
            self.start_record
        }

        fn maximum_records(&self) -> u32 {
            10
        }
    }

    fn engine() -> SearchEngine {
        let config = EndpointConfig {
            default_resource_pid: "pid-a".to_string(),
            ..EndpointConfig::default()
        };
        SearchEngine::from_inventory(
            [("pid-a", vec!["hits"]), ("pid-b", vec!["hits"])],
            config,
        )
        .unwrap()
    }

    #[test]
    fn unknown_default_resource_fails_construction() {
        let err = SearchEngine::from_inventory(
            [("pid-a", vec!["hits"])],
            EndpointConfig {
                default_resource_pid: "pid-z".to_string(),
                ..EndpointConfig::default()
            },
        )
        .map(|_| ())
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.sru_code(), 1);
    }

    #[tokio::test]
    async fn rejects_foreign_query_type() {
        let mut request = MockRequest::cql(QueryNode::term("storm"));
        request.query_type = "fcs";
        let mut diagnostics = Diagnostics::new();

        let err = engine().search(&request, &mut diagnostics).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedQuery(_)));
        assert!(err.to_string().contains("queryType 'fcs'"));
        assert_eq!(err.sru_code(), 47);
    }

    #[tokio::test]
    async fn untranslatable_query_maps_to_cannot_process() {
        let request = MockRequest::cql(QueryNode::Not {
            left: Box::new(QueryNode::term("ship")),
            right: Box::new(QueryNode::term("storm")),
            modifiers: Vec::new(),
        });
        let mut diagnostics = Diagnostics::new();

        let err = engine().search(&request, &mut diagnostics).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedQuery(_)));
        assert_eq!(err.sru_code(), 47);
    }

    #[tokio::test]
    async fn all_invalid_context_pids_abort_with_one_diagnostic_each() {
        let request = MockRequest::cql(QueryNode::term("storm"))
            .with_param(X_FCS_CONTEXT, "nope,also-nope");
        let mut diagnostics = Diagnostics::new();

        let err = engine().search(&request, &mut diagnostics).await.unwrap_err();
        assert!(matches!(err, Error::NoValidResource));
        assert_eq!(err.sru_code(), 6);
        assert_eq!(diagnostics.len(), 2);
    }

    #[tokio::test]
    async fn multiple_valid_context_pids_are_refused() {
        let request = MockRequest::cql(QueryNode::term("storm"))
            .with_param(X_FCS_CONTEXT, "pid-a,pid-b");
        let mut diagnostics = Diagnostics::new();

        let err = engine().search(&request, &mut diagnostics).await.unwrap_err();
        assert!(matches!(err, Error::MultipleResourcesUnsupported));
        assert_eq!(err.sru_code(), 6);
    }
}
