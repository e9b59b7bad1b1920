use thiserror::Error;

pub type Result<T> = std::result::Result<T, HitsError>;

/// Record serialization failures. A failed record must not be partially
/// emitted, so every variant aborts the whole record.
#[derive(Debug, Error)]
pub enum HitsError {
    #[error("cursor does not point at a record")]
    NoCurrentRecord,

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute in highlight fragment: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("non-UTF-8 name in highlight fragment: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
