//! Routes: a parsed pattern bound to a view, plus optional name and metadata

use std::collections::HashMap;

use crate::error::PatternError;
use crate::pattern::{Params, PathPattern};

/// A single route with its pattern, view and metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Route<V> {
    /// Parsed URL pattern like `/order/:id`
    pub pattern: PathPattern,
    /// Identifier of the view mounted when this route matches
    pub view: V,
    /// Optional name for URL generation
    pub name: Option<String>,
    /// Arbitrary metadata (titles, cache hints, ...)
    pub metadata: HashMap<String, String>,
    /// Priority for matching (lower = tried first)
    pub priority: usize,
}

/// Result of matching a route against a path
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<V> {
    /// The matched route
    pub route: Route<V>,
    /// Parameters extracted from the path
    pub params: Params,
}

impl<V> RouteMatch<V> {
    pub fn view(&self) -> &V {
        &self.route.view
    }

    /// Gets a bound parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl<V> Route<V> {
    /// Creates a route from a pattern string
    ///
    /// # Examples
    ///
    /// ```
    /// use exchange_router::Route;
    ///
    /// let route = Route::new("/order/:id", "order").unwrap();
    /// assert_eq!(route.pattern.as_str(), "/order/:id");
    /// assert!(route.priority > 0);
    /// ```
    pub fn new(pattern: &str, view: V) -> Result<Self, PatternError> {
        Ok(Self::from_pattern(PathPattern::parse(pattern)?, view))
    }

    /// Creates a route from an already parsed pattern
    pub fn from_pattern(pattern: PathPattern, view: V) -> Self {
        let priority = pattern.priority();
        Route {
            pattern,
            view,
            name: None,
            metadata: HashMap::new(),
            priority,
        }
    }

    /// Matches this route against a normalized path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.pattern.matches(path, false)
    }

    /// Matches this route against a normalized path with options
    pub fn matches_with_options(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        self.pattern.matches(path, case_insensitive)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Sets a name for this route (for URL generation)
    ///
    /// ```
    /// use exchange_router::Route;
    ///
    /// let route = Route::new("/kyc", ()).unwrap().with_name("kyc");
    /// assert_eq!(route.name.as_deref(), Some("kyc"));
    /// ```
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a metadata key-value pair
    ///
    /// ```
    /// use exchange_router::Route;
    ///
    /// let route = Route::new("/terms", ())
    ///     .unwrap()
    ///     .with_meta("title", "Terms");
    ///
    /// assert_eq!(route.get_meta("title"), Some("Terms"));
    /// assert_eq!(route.get_meta("missing"), None);
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// ```
    /// use exchange_router::Route;
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/order/:id", ()).unwrap();
    /// let params = HashMap::from([("id".to_string(), "42".to_string())]);
    /// assert_eq!(route.generate_url(&params).as_deref(), Some("/order/42"));
    /// ```
    pub fn generate_url(&self, params: &Params) -> Option<String> {
        self.pattern.generate(params)
    }
}
