use gazette_model::{
    Diagnostic, RegistryError, SRU_CANNOT_PROCESS_QUERY, SRU_FIRST_RECORD_POSITION_OUT_OF_RANGE,
    SRU_GENERAL_SYSTEM_ERROR, SRU_UNSUPPORTED_PARAMETER_VALUE,
};
use gazette_query::QueryError;
use gazette_solr::SolrError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal request failures, each mapped onto its SRU diagnostic code.
/// Single-value problems never land here; they degrade into non-fatal
/// diagnostics and the request continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot process query: {0}")]
    UnsupportedQuery(String),

    #[error("all values passed to 'x-fcs-context' were invalid resource pids for this endpoint")]
    NoValidResource,

    #[error("'x-fcs-context' received multiple resource pids; this endpoint searches a single resource per request")]
    MultipleResourcesUnsupported,

    #[error("first record position out of range")]
    OffsetOutOfRange,

    #[error("backend search failed: {0}")]
    Backend(#[source] SolrError),

    #[error("endpoint configuration error: {0}")]
    Config(#[from] RegistryError),
}

impl Error {
    /// SRU diagnostic code the protocol runtime should answer with.
    pub fn sru_code(&self) -> u16 {
        match self {
            Error::UnsupportedQuery(_) => SRU_CANNOT_PROCESS_QUERY,
            Error::NoValidResource | Error::MultipleResourcesUnsupported => {
                SRU_UNSUPPORTED_PARAMETER_VALUE
            }
            Error::OffsetOutOfRange => SRU_FIRST_RECORD_POSITION_OUT_OF_RANGE,
            Error::Backend(_) | Error::Config(_) => SRU_GENERAL_SYSTEM_ERROR,
        }
    }

    /// Render this failure as the diagnostic the response will carry.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::sru(self.sru_code(), self.to_string())
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        Error::UnsupportedQuery(err.to_string())
    }
}

impl From<SolrError> for Error {
    fn from(err: SolrError) -> Self {
        match err {
            SolrError::OffsetOutOfRange { .. } => Error::OffsetOutOfRange,
            other => Error::Backend(other),
        }
    }
}
