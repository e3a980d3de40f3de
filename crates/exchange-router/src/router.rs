//! Route matching: ranks routes by specificity and resolves paths

use std::collections::HashMap;

use crate::path::normalize_path;
use crate::pattern::Params;
use crate::registry::RouteRegistry;
use crate::route::{Route, RouteMatch};

/// Outcome of resolving a path against a [`Router`]
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<V> {
    /// A route accepted the path
    Matched(RouteMatch<V>),
    /// No route accepted the (normalized) path
    NotFound { path: String },
}

impl<V> Resolution<V> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }

    /// The resolved view, if any
    pub fn view(&self) -> Option<&V> {
        match self {
            Resolution::Matched(m) => Some(&m.route.view),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Bound parameter by name (always `None` for `NotFound`)
    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            Resolution::Matched(m) => m.param(name),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn route_match(&self) -> Option<&RouteMatch<V>> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::NotFound { .. } => None,
        }
    }
}

/// Matcher over a set of routes
///
/// Routes are kept sorted by priority (static before dynamic, shallower
/// before deeper); ties keep insertion order. The first route that accepts
/// the normalized path wins.
///
/// # Examples
///
/// ```
/// use exchange_router::{Route, Router};
///
/// let router = Router::new()
///     .with_route(Route::new("/order/:id", "order").unwrap())
///     .with_route(Route::new("/order/latest", "latest").unwrap());
///
/// let m = router.match_route("/order/latest").unwrap();
/// assert_eq!(m.route.view, "latest");
///
/// let m = router.match_route("/order/123").unwrap();
/// assert_eq!(m.param("id"), Some("123"));
/// ```
#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
    named_routes: HashMap<String, usize>,
    case_insensitive: bool,
}

impl<V: Clone> Router<V> {
    /// Creates a new router with default settings (case-sensitive)
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named_routes: HashMap::new(),
            case_insensitive: false,
        }
    }

    /// Builds a router over every route of a registry
    pub fn from_registry(registry: &RouteRegistry<V>) -> Self {
        Self::new().with_routes(registry.routes().iter().cloned())
    }

    /// Configures case sensitivity of literal segments
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_route(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self.reindex();
        self
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route<V>>,
    {
        self.routes.extend(routes);
        self.reindex();
        self
    }

    fn reindex(&mut self) {
        // stable: equal priorities keep declaration order
        self.routes.sort_by_key(|route| route.priority);
        self.named_routes = self
            .routes
            .iter()
            .enumerate()
            .filter_map(|(idx, route)| route.name.clone().map(|name| (name, idx)))
            .collect();
    }

    /// Finds the first route accepting `path`
    ///
    /// The path is normalized first, so `/kyc/` and `//kyc` behave as `/kyc`.
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<V>> {
        let path = normalize_path(path);
        self.routes.iter().find_map(|route| {
            route
                .matches_with_options(&path, self.case_insensitive)
                .map(|params| RouteMatch {
                    route: route.clone(),
                    params,
                })
        })
    }

    /// Resolves `path` into a [`Resolution`], never failing
    pub fn resolve(&self, path: &str) -> Resolution<V> {
        match self.match_route(path) {
            Some(m) => {
                tracing::debug!(path, pattern = %m.route.pattern, "route matched");
                Resolution::Matched(m)
            }
            None => {
                tracing::debug!(path, "no route matched");
                Resolution::NotFound {
                    path: normalize_path(path).into_owned(),
                }
            }
        }
    }

    /// Generates a URL from a named route and parameters
    ///
    /// ```
    /// use exchange_router::{Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::new("/order/:id", ()).unwrap().with_name("order"));
    ///
    /// let url = router.url_for_params("order", &[("id", "9")]).unwrap();
    /// assert_eq!(url, "/order/9");
    /// assert!(router.url_for_params("order", &[]).is_none());
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Option<String> {
        self.get_route_by_name(name)
            .and_then(|route| route.generate_url(params))
    }

    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let param_map: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &param_map)
    }

    pub fn get_route_by_name(&self, name: &str) -> Option<&Route<V>> {
        self.named_routes.get(name).map(|&idx| &self.routes[idx])
    }

    /// Routes in matching order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

impl<V: Clone> Default for Router<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router<&'static str> {
        Router::new().with_routes([
            Route::new("/", "main").unwrap(),
            Route::new("/order/:id", "order").unwrap().with_name("order"),
            Route::new("/terms", "terms").unwrap(),
        ])
    }

    #[test]
    fn test_static_routes_sort_before_dynamic() {
        let router = router();
        let patterns: Vec<&str> = router.routes().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/", "/terms", "/order/:id"]);
    }

    #[test]
    fn test_resolve_not_found_keeps_normalized_path() {
        let resolution = router().resolve("/nope/");
        assert_eq!(
            resolution,
            Resolution::NotFound {
                path: "/nope".to_string()
            }
        );
        assert_eq!(resolution.view(), None);
        assert_eq!(resolution.param("id"), None);
    }

    #[test]
    fn test_named_index_survives_resort() {
        let router = router().with_route(Route::new("/kyc", "kyc").unwrap());
        assert_eq!(router.get_route_by_name("order").unwrap().view, "order");
    }

    #[test]
    fn test_case_insensitive_router() {
        let router = router().with_case_sensitivity(true);
        assert_eq!(router.resolve("/TERMS").view(), Some(&"terms"));
        assert_eq!(router.resolve("/Order/AbC").param("id"), Some("AbC"));
    }
}
