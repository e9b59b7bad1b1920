use crate::constants::{HIT_CLOSE, HIT_OPEN, ITEM_URL_TEMPLATE};
use quick_xml::escape::escape;

/// Number of leading document-id characters forming the stable portal item id.
const ITEM_ID_LEN: usize = 32;

/// One retrieved page-level document with its cleaned highlight fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultEntry {
    document_id: String,
    page_number: String,
    title: String,
    highlights: Vec<String>,
}

impl ResultEntry {
    pub fn new(
        document_id: impl Into<String>,
        page_number: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            page_number: page_number.into(),
            title: title.into(),
            highlights: Vec::new(),
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn page_number(&self) -> &str {
        &self.page_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cleaned highlight fragments: escaped text with at most one literal
    /// hit span each.
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    /// Escape raw backend fragments and restore the designated hit markers.
    ///
    /// Escaping runs first. Only then is the first marker pair turned back
    /// into literal tags, and every remaining escaped marker occurrence is
    /// stripped without trace. Reversing the order would let raw backend
    /// markup through unescaped.
    pub fn set_highlights<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.highlights.clear();
        for fragment in raw {
            self.highlights.push(clean_fragment(fragment.as_ref()));
        }
    }

    /// Stable portal item id: the first 32 characters of the document id.
    pub fn item_id(&self) -> &str {
        self.document_id.get(..ITEM_ID_LEN).unwrap_or(&self.document_id)
    }

    /// Portal URL pointing back at this entry for the given query.
    pub fn backlink(&self, query: &str) -> String {
        ITEM_URL_TEMPLATE
            .replace("{{item}}", self.item_id())
            .replace("{{query}}", query)
            .replace("{{page}}", &self.page_number)
    }
}

fn clean_fragment(raw: &str) -> String {
    let escaped_open = escape(HIT_OPEN);
    let escaped_close = escape(HIT_CLOSE);
    escape(raw)
        .replacen(escaped_open.as_ref(), HIT_OPEN, 1)
        .replacen(escaped_close.as_ref(), HIT_CLOSE, 1)
        .replace(escaped_open.as_ref(), "")
        .replace(escaped_close.as_ref(), "")
}
