//! Wire-format constants of the SRU/FCS protocol and the newspaper portal.

/// Extension parameter selecting the resource(s) a request targets.
pub const X_FCS_CONTEXT: &str = "x-fcs-context";
pub const X_FCS_CONTEXT_SEPARATOR: char = ',';

/// Extension parameter selecting the requested data views.
pub const X_FCS_DATAVIEWS: &str = "x-fcs-dataviews";
pub const X_FCS_DATAVIEWS_SEPARATOR: char = ',';

/// The only record schema this endpoint can serve.
pub const CLARIN_FCS_RECORD_SCHEMA: &str = "http://clarin.eu/fcs/resource";

pub const FCS_RESOURCE_NS: &str = "http://clarin.eu/fcs/resource";
pub const FCS_HITS_MIMETYPE: &str = "application/x-clarin-fcs-hits+xml";
pub const FCS_HITS_NS: &str = "http://clarin.eu/fcs/dataview/hits";

/// Marker pair the backend wraps matched spans in. Escaping of raw fragments
/// runs first; exactly these tokens are restored to literal tags afterwards.
pub const HIT_OPEN: &str = "<Hit>";
pub const HIT_CLOSE: &str = "</Hit>";

/// SRU diagnostic codes used by this endpoint.
pub const SRU_GENERAL_SYSTEM_ERROR: u16 = 1;
pub const SRU_UNSUPPORTED_PARAMETER_VALUE: u16 = 6;
pub const SRU_CANNOT_PROCESS_QUERY: u16 = 47;
pub const SRU_FIRST_RECORD_POSITION_OUT_OF_RANGE: u16 = 61;
pub const SRU_RECORD_NOT_AVAILABLE_IN_THIS_SCHEMA: u16 = 67;

/// FCS diagnostic: persistent identifier invalid or unknown.
pub const FCS_DIAGNOSTIC_PID_INVALID: &str = "http://clarin.eu/fcs/diagnostic/1";

pub fn sru_diagnostic_uri(code: u16) -> String {
    format!("info:srw/diagnostic/1/{code}")
}

/// Back-link template of the portal page an entry points back into.
pub(crate) const ITEM_URL_TEMPLATE: &str =
    "https://www.deutsche-digitale-bibliothek.de/newspaper/item/{{item}}?query={{query}}&issuepage={{page}}";
