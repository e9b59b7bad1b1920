use crate::error::{Error, Result};
use gazette_model::{
    Diagnostic, Diagnostics, ResourceRegistry, X_FCS_CONTEXT_SEPARATOR, X_FCS_DATAVIEWS_SEPARATOR,
};

/// Resolve the resource pids a request targets.
///
/// An absent or blank `x-fcs-context` selects the configured default
/// resource. Unknown pids are dropped with a per-value diagnostic; the
/// request only fails when no valid pid remains, or when more than one does
/// (this endpoint searches a single resource per request).
pub fn resolve_resources(
    registry: &ResourceRegistry,
    context: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<String>> {
    let candidates: Vec<&str> = match context.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .split(X_FCS_CONTEXT_SEPARATOR)
            .map(str::trim)
            .collect(),
        _ => vec![registry.default_resource()],
    };

    let mut valid = Vec::new();
    for pid in candidates {
        if registry.contains(pid) {
            valid.push(pid.to_string());
        } else {
            tracing::debug!(pid, "request named an unknown resource pid");
            diagnostics.add(Diagnostic::fcs_invalid_pid(
                pid,
                format!("Resource pid '{pid}' is not provided by this endpoint."),
            ));
        }
    }

    if valid.is_empty() {
        return Err(Error::NoValidResource);
    }
    if valid.len() > 1 {
        return Err(Error::MultipleResourcesUnsupported);
    }
    Ok(valid)
}

/// Resolve the data view ids a request asks for against what the resource
/// declares. An absent parameter means no explicit request; unknown ids are
/// dropped with a per-value diagnostic and never fail the request.
pub fn resolve_data_views(
    registry: &ResourceRegistry,
    resource_pid: &str,
    requested: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let Some(raw) = requested else {
        return Vec::new();
    };

    let mut views = Vec::new();
    for view in raw.split(X_FCS_DATAVIEWS_SEPARATOR).map(str::trim) {
        let declared = registry
            .data_views(resource_pid)
            .is_some_and(|declared| declared.contains(view));
        if declared {
            views.push(view.to_string());
        } else {
            tracing::debug!(view, resource_pid, "request named an undeclared data view");
            diagnostics.add(Diagnostic::fcs_invalid_pid(
                view,
                format!("Data view '{view}' is not declared for resource '{resource_pid}'."),
            ));
        }
    }
    views
}
