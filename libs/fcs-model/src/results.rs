use crate::entry::ResultEntry;

/// One request's assembled search outcome: the fetched window plus the
/// backend's total match count. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ResultSet {
    resource_pid: String,
    query: String,
    entries: Vec<ResultEntry>,
    total: u64,
    offset: u64,
}

impl ResultSet {
    pub fn new(
        resource_pid: impl Into<String>,
        query: impl Into<String>,
        entries: Vec<ResultEntry>,
        total: u64,
        offset: u64,
    ) -> Self {
        Self {
            resource_pid: resource_pid.into(),
            query: query.into(),
            entries,
            total,
            offset,
        }
    }

    pub fn resource_pid(&self) -> &str {
        &self.resource_pid
    }

    /// Translated query the window was fetched with.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}
