use crate::constants::{sru_diagnostic_uri, FCS_DIAGNOSTIC_PID_INVALID};

/// A non-fatal SRU diagnostic: code URI, optional context details, message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub uri: String,
    pub details: Option<String>,
    pub message: Option<String>,
}

impl Diagnostic {
    pub fn sru(code: u16, message: impl Into<String>) -> Self {
        Self {
            uri: sru_diagnostic_uri(code),
            details: None,
            message: Some(message.into()),
        }
    }

    /// FCS "persistent identifier invalid" diagnostic for one rejected value.
    pub fn fcs_invalid_pid(details: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uri: FCS_DIAGNOSTIC_PID_INVALID.to_string(),
            details: Some(details.into()),
            message: Some(message.into()),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Ordered sink for the non-fatal diagnostics attached to one response.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
