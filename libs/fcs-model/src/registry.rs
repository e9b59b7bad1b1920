use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("default resource pid '{0}' is not declared in the endpoint inventory")]
    UnknownDefaultResource(String),
}

/// Read-only inventory of the endpoint's resources and their declared data views.
///
/// Populated once at startup from the endpoint description and shared by all
/// requests afterwards; nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, BTreeSet<String>>,
    default_resource: String,
}

impl ResourceRegistry {
    /// Build the registry from an already-loaded inventory of
    /// `(resource pid, declared data view ids)` pairs.
    ///
    /// The default resource must be part of the inventory; startup is the
    /// only place this can be caught, so an unknown default is an error.
    pub fn new<I, D, S>(inventory: I, default_resource: impl Into<String>) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, D)>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resources: BTreeMap<String, BTreeSet<String>> = inventory
            .into_iter()
            .map(|(pid, views)| (pid.into(), views.into_iter().map(Into::into).collect()))
            .collect();
        let default_resource = default_resource.into();
        if !resources.contains_key(&default_resource) {
            return Err(RegistryError::UnknownDefaultResource(default_resource));
        }
        Ok(Self {
            resources,
            default_resource,
        })
    }

    pub fn contains(&self, pid: &str) -> bool {
        self.resources.contains_key(pid)
    }

    /// Resource searched when a request names none.
    pub fn default_resource(&self) -> &str {
        &self.default_resource
    }

    /// Data view ids declared for a resource, if the resource is known.
    pub fn data_views(&self, pid: &str) -> Option<&BTreeSet<String>> {
        self.resources.get(pid)
    }

    pub fn pids(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_default_resource() {
        let err = ResourceRegistry::new([("pid-a", vec!["hits"])], "pid-b").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownDefaultResource(pid) if pid == "pid-b"));
    }

    #[test]
    fn looks_up_declared_data_views() {
        let registry =
            ResourceRegistry::new([("pid-a", vec!["hits", "adv"]), ("pid-b", vec![])], "pid-a")
                .unwrap();
        assert!(registry.contains("pid-a"));
        assert!(!registry.contains("pid-c"));
        assert_eq!(registry.default_resource(), "pid-a");
        assert!(registry.data_views("pid-a").unwrap().contains("hits"));
        assert!(registry.data_views("pid-b").unwrap().is_empty());
        assert!(registry.data_views("pid-c").is_none());
        assert_eq!(registry.len(), 2);
    }
}
