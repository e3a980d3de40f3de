//! Route registry: the declared, validated table of navigable paths
//!
//! The registry is built once from an ordered list of [`RouteEntry`] values
//! and is immutable afterwards. Construction checks that every pattern
//! parses, that no path is declared twice, that no two patterns accept the
//! same URLs (ignoring ASCII case, so the table stays unambiguous for
//! case-insensitive routers), that route names are unique, and that the
//! root `/` is present.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::pattern::PathPattern;
use crate::route::Route;

/// A declared (path pattern, view) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    pub path: String,
    pub view: V,
    pub name: Option<String>,
}

impl<V> RouteEntry<V> {
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Ordered, validated set of route entries
///
/// # Examples
///
/// ```
/// use exchange_router::{RouteEntry, RouteRegistry};
///
/// let registry = RouteRegistry::new([
///     RouteEntry::new("/", "main"),
///     RouteEntry::new("/order/:id", "order"),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.view_for_path("/order/:id"), Some(&"order"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRegistry<V> {
    entries: Vec<RouteEntry<V>>,
    routes: Vec<Route<V>>,
}

impl<V: Clone> RouteRegistry<V> {
    /// Validates and builds a registry, preserving declaration order
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = RouteEntry<V>>,
    {
        let entries: Vec<RouteEntry<V>> = entries.into_iter().collect();
        let mut routes = Vec::with_capacity(entries.len());
        let mut shapes: HashMap<String, &str> = HashMap::new();
        let mut names: HashMap<&str, &str> = HashMap::new();

        for entry in &entries {
            let pattern =
                PathPattern::parse(&entry.path).map_err(|source| RegistryError::InvalidPattern {
                    path: entry.path.clone(),
                    source,
                })?;

            if let Some(existing) = shapes.insert(pattern.shape().to_ascii_lowercase(), &entry.path) {
                return Err(if existing == entry.path {
                    RegistryError::DuplicatePath(entry.path.clone())
                } else {
                    RegistryError::ConflictingPattern {
                        path: entry.path.clone(),
                        existing: existing.to_string(),
                    }
                });
            }

            if let Some(name) = entry.name.as_deref() {
                if let Some(existing) = names.insert(name, &entry.path) {
                    return Err(RegistryError::DuplicateName {
                        name: name.to_string(),
                        path: entry.path.clone(),
                        existing: existing.to_string(),
                    });
                }
            }

            let mut route = Route::from_pattern(pattern, entry.view.clone());
            route.name = entry.name.clone();
            routes.push(route);
        }

        if !shapes.contains_key("/") {
            return Err(RegistryError::MissingRoot);
        }

        tracing::debug!(routes = routes.len(), "route registry built");

        Ok(Self { entries, routes })
    }
}

impl<V> RouteRegistry<V> {
    /// Entries in declaration order
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// Parsed routes in declaration order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `path` is declared verbatim (no matching is performed)
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    /// View declared for the literal pattern `path`
    pub fn view_for_path(&self, path: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn test_registry_preserves_order() {
        let registry =
            RouteRegistry::new([RouteEntry::new("/", 0), RouteEntry::new("/b", 1), RouteEntry::new("/a", 2)])
                .unwrap();
        let paths: Vec<&str> = registry.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/b", "/a"]);
        assert_eq!(registry.routes()[2].view, 2);
    }

    #[test]
    fn test_registry_rejects_duplicate_path() {
        let err = RouteRegistry::new([
            RouteEntry::new("/", ()),
            RouteEntry::new("/kyc", ()),
            RouteEntry::new("/kyc", ()),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicatePath("/kyc".into()));
    }

    #[test]
    fn test_registry_rejects_conflicting_params() {
        let err = RouteRegistry::new([
            RouteEntry::new("/", ()),
            RouteEntry::new("/order/:id", ()),
            RouteEntry::new("/order/:code", ()),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::ConflictingPattern {
                path: "/order/:code".into(),
                existing: "/order/:id".into(),
            }
        );
    }

    #[test]
    fn test_registry_rejects_paths_differing_only_in_case() {
        let err = RouteRegistry::new([
            RouteEntry::new("/", ()),
            RouteEntry::new("/Kyc", ()),
            RouteEntry::new("/kyc", ()),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::ConflictingPattern {
                path: "/kyc".into(),
                existing: "/Kyc".into(),
            }
        );
    }

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let err = RouteRegistry::new([
            RouteEntry::new("/", ()).with_name("page"),
            RouteEntry::new("/kyc", ()).with_name("page"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "page".into(),
                path: "/kyc".into(),
                existing: "/".into(),
            }
        );
    }

    #[test]
    fn test_registry_requires_root() {
        let err = RouteRegistry::new([RouteEntry::new("/kyc", ())]).unwrap_err();
        assert_eq!(err, RegistryError::MissingRoot);
    }

    #[test]
    fn test_registry_reports_bad_pattern() {
        let err = RouteRegistry::new([RouteEntry::new("/", ()), RouteEntry::new("kyc", ())]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidPattern {
                path: "kyc".into(),
                source: PatternError::MissingLeadingSlash("kyc".into()),
            }
        );
    }

    #[test]
    fn test_entry_name_carries_to_route() {
        let registry =
            RouteRegistry::new([RouteEntry::new("/", ()).with_name("main")]).unwrap();
        assert_eq!(registry.routes()[0].name.as_deref(), Some("main"));
    }
}
