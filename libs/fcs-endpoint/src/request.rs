use gazette_query::QueryNode;

/// The only query-language tag this endpoint accepts.
pub const QUERY_TYPE_CQL: &str = "cql";

/// Inbound searchRetrieve request, as exposed by the hosting protocol
/// runtime. The runtime parses the wire request; this trait is the boundary
/// the pipeline consumes it through.
pub trait SearchRequest {
    /// Parsed query tree.
    fn query(&self) -> &QueryNode;

    /// Declared query-language tag, e.g. `cql`.
    fn query_type(&self) -> &str;

    /// Value of a named extension parameter, if the request carries it.
    fn extra_param(&self, name: &str) -> Option<&str>;

    /// Requested 1-based start position. Values below 1 are treated as 1.
    fn start_record(&self) -> u32;

    /// Requested maximum number of records.
    fn maximum_records(&self) -> u32;
}
