//! Navigator: the router instance that ties a route table to a history

use crate::error::NavigationError;
use crate::history::History;
use crate::location::Location;
use crate::registry::RouteRegistry;
use crate::router::{Resolution, Router};

/// Options for [`Navigator::new`]
#[derive(Debug, Clone, Default)]
pub struct NavigatorOptions {
    /// Match literal segments ignoring ASCII case
    pub case_insensitive: bool,
}

/// Router instance produced from a history strategy and a route registry
///
/// Keeps the resolution of the current history entry up to date across
/// `push`, `replace`, `back`, `forward` and `go`.
///
/// # Examples
///
/// ```
/// use exchange_router::{MemoryHistory, Navigator, RouteEntry, RouteRegistry};
///
/// let registry = RouteRegistry::new([
///     RouteEntry::new("/", "main"),
///     RouteEntry::new("/order/:id", "order"),
/// ])
/// .unwrap();
///
/// let mut nav = Navigator::new(MemoryHistory::new(), &registry, Default::default());
/// assert_eq!(nav.current().view(), Some(&"main"));
///
/// let resolved = nav.push("/order/55").unwrap();
/// assert_eq!(resolved.param("id"), Some("55"));
///
/// nav.back().unwrap();
/// assert_eq!(nav.location().path, "/");
/// ```
#[derive(Debug)]
pub struct Navigator<V, H> {
    router: Router<V>,
    history: H,
    current: Resolution<V>,
}

impl<V: Clone, H: History> Navigator<V, H> {
    pub fn new(history: H, registry: &RouteRegistry<V>, options: NavigatorOptions) -> Self {
        let router = Router::from_registry(registry).with_case_sensitivity(options.case_insensitive);
        Self::with_router(history, router)
    }

    /// Builds a navigator over an already configured [`Router`]
    pub fn with_router(history: H, router: Router<V>) -> Self {
        let current = router.resolve(&history.location().path);
        Self {
            router,
            history,
            current,
        }
    }

    /// Resolution of the current location
    pub fn current(&self) -> &Resolution<V> {
        &self.current
    }

    /// Current base-relative location
    pub fn location(&self) -> &Location {
        self.history.location()
    }

    /// Resolves a target without navigating
    pub fn resolve(&self, to: &str) -> Resolution<V> {
        self.router.resolve(&Location::parse(to).path)
    }

    /// Navigates to `to`, adding a history entry
    pub fn push(&mut self, to: &str) -> Result<&Resolution<V>, NavigationError> {
        let location = self.target(to)?;
        self.history.push(location);
        Ok(self.sync("push"))
    }

    /// Navigates to `to`, replacing the current history entry
    pub fn replace(&mut self, to: &str) -> Result<&Resolution<V>, NavigationError> {
        let location = self.target(to)?;
        self.history.replace(location);
        Ok(self.sync("replace"))
    }

    /// Moves back one entry; `None` when already at the oldest entry
    pub fn back(&mut self) -> Option<&Resolution<V>> {
        self.go(-1)
    }

    /// Moves forward one entry; `None` when already at the newest entry
    pub fn forward(&mut self) -> Option<&Resolution<V>> {
        self.go(1)
    }

    pub fn go(&mut self, delta: isize) -> Option<&Resolution<V>> {
        if self.history.go(delta) {
            Some(self.sync("go"))
        } else {
            None
        }
    }

    /// Full URL of the current location, base path included
    pub fn href(&self) -> String {
        self.history.href(self.history.location())
    }

    pub fn router(&self) -> &Router<V> {
        &self.router
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn target(&self, to: &str) -> Result<Location, NavigationError> {
        if !to.starts_with('/') {
            return Err(NavigationError::InvalidTarget(to.to_string()));
        }
        let location = Location::parse(to);
        if &location == self.history.location() {
            return Err(NavigationError::Duplicated(location.to_string()));
        }
        Ok(location)
    }

    fn sync(&mut self, via: &'static str) -> &Resolution<V> {
        let path = &self.history.location().path;
        self.current = self.router.resolve(path);
        tracing::debug!(
            via,
            path = %path,
            matched = self.current.is_matched(),
            "navigation complete"
        );
        &self.current
    }
}
