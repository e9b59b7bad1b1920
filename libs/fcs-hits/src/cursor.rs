use crate::error::{HitsError, Result};
use crate::fragment::write_fragment;
use gazette_model::{
    Diagnostic, ResultEntry, ResultSet, CLARIN_FCS_RECORD_SCHEMA, FCS_HITS_MIMETYPE, FCS_HITS_NS,
    FCS_RESOURCE_NS, SRU_RECORD_NOT_AVAILABLE_IN_THIS_SCHEMA,
};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::collections::BTreeSet;
use std::io::Write;

/// Forward-only cursor over one request's result set.
///
/// The cursor starts before the first record. `advance` is the only
/// transition: it moves one record forward and reports whether a current
/// record exists. It never moves backward, and advancing past the last
/// record is a no-op. One cursor belongs to one request.
#[derive(Debug)]
pub struct ResultCursor {
    results: ResultSet,
    data_views: BTreeSet<String>,
    position: Option<usize>,
}

impl ResultCursor {
    pub fn new(results: ResultSet, data_views: impl IntoIterator<Item = String>) -> Self {
        Self {
            results,
            data_views: data_views.into_iter().collect(),
            position: None,
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Data view ids the request asked for. Informational; the hits view is
    /// the only one this endpoint renders.
    pub fn data_views(&self) -> &BTreeSet<String> {
        &self.data_views
    }

    /// Total number of matches the query produced on the backend.
    pub fn total_record_count(&self) -> u64 {
        self.results.total()
    }

    /// Number of records present in this window.
    pub fn record_count(&self) -> usize {
        self.results.entries().len()
    }

    /// Move to the next record. Returns false when no record remains.
    pub fn advance(&mut self) -> bool {
        let next = self.position.map_or(0, |position| position + 1);
        if next < self.record_count() {
            self.position = Some(next);
            true
        } else {
            false
        }
    }

    /// The record the cursor currently points at, if any.
    pub fn current(&self) -> Option<&ResultEntry> {
        self.position
            .and_then(|position| self.results.entries().get(position))
    }

    /// Serialize the current record as one FCS resource fragment.
    pub fn write_record<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let entry = self.current().ok_or(HitsError::NoCurrentRecord)?;

        let mut resource = BytesStart::new("fcs:Resource");
        resource.push_attribute(("xmlns:fcs", FCS_RESOURCE_NS));
        resource.push_attribute(("pid", self.results.resource_pid()));
        writer.write_event(Event::Start(resource))?;

        let mut fragment = BytesStart::new("fcs:ResourceFragment");
        fragment.push_attribute(("pid", entry.document_id()));
        fragment.push_attribute(("ref", entry.backlink(self.results.query()).as_str()));
        writer.write_event(Event::Start(fragment))?;

        write_hits_data_view(writer, entry)?;

        writer.write_event(Event::End(BytesEnd::new("fcs:ResourceFragment")))?;
        writer.write_event(Event::End(BytesEnd::new("fcs:Resource")))?;
        Ok(())
    }
}

fn write_hits_data_view<W: Write>(writer: &mut Writer<W>, entry: &ResultEntry) -> Result<()> {
    let mut data_view = BytesStart::new("fcs:DataView");
    data_view.push_attribute(("type", FCS_HITS_MIMETYPE));
    writer.write_event(Event::Start(data_view))?;

    let mut result = BytesStart::new("hits:Result");
    result.push_attribute(("xmlns:hits", FCS_HITS_NS));
    writer.write_event(Event::Start(result))?;

    if let Some(fragment) = entry.highlights().first() {
        write_fragment(writer, fragment)?;
    }

    writer.write_event(Event::End(BytesEnd::new("hits:Result")))?;
    writer.write_event(Event::End(BytesEnd::new("fcs:DataView")))?;
    Ok(())
}

/// Record schema a response will be written in: the requested one if any,
/// else the FCS default.
pub fn effective_record_schema(requested: Option<&str>) -> &str {
    requested.unwrap_or(CLARIN_FCS_RECORD_SCHEMA)
}

/// Surrogate diagnostic for a record requested in a schema this endpoint
/// cannot serve. `None` means the record can be written.
pub fn schema_surrogate_diagnostic(requested: Option<&str>) -> Option<Diagnostic> {
    let schema = effective_record_schema(requested);
    if schema == CLARIN_FCS_RECORD_SCHEMA {
        return None;
    }
    Some(
        Diagnostic::sru(
            SRU_RECORD_NOT_AVAILABLE_IN_THIS_SCHEMA,
            format!("Record is not available in record schema \"{schema}\"."),
        )
        .with_details(schema),
    )
}
