use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Query shapes this endpoint refuses to translate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("index/relation '{0}' on terms is not supported by this endpoint")]
    UnsupportedIndex(String),

    #[error("modifiers on '{0}' operators are not supported by this endpoint")]
    UnsupportedModifiers(&'static str),

    #[error("'{0}' queries are not supported by this endpoint")]
    UnsupportedConstruct(&'static str),
}
