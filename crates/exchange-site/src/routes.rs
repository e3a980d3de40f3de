//! The site's route table and router factory
//!
//! [`ROUTE_TABLE`] is the whole navigable surface of the site. It is
//! validated into a [`RouteRegistry`] once per process ([`registry`]) and
//! handed to [`create_router`], which plays the part of the router factory:
//! a history strategy plus the route list in, a navigator out.

use exchange_router::{
    History, Navigator, NavigatorOptions, RegistryError, RouteEntry, RouteRegistry, Router,
};
use once_cell::sync::Lazy;

use crate::view::View;

/// Declared (path pattern, view) pairs, in declaration order
///
/// `goverment` is misspelled in the public URL and stays that way.
pub const ROUTE_TABLE: &[(&str, View)] = &[
    ("/", View::Main),
    ("/exchange", View::Exchange),
    ("/docs/how-it-works", View::HowItWorks),
    ("/for-partners", View::Partners),
    ("/terms", View::Terms),
    ("/privacy-policy", View::Privacy),
    ("/cookie-policy", View::Cookie),
    ("/goverment-requests-guidelines", View::Government),
    ("/kyc", View::Kyc),
    ("/about-us", View::AboutUs),
    ("/vip-clients", View::VipClients),
    ("/order/:id", View::Order),
];

static REGISTRY: Lazy<RouteRegistry<View>> = Lazy::new(|| match build_registry() {
    Ok(registry) => registry,
    Err(e) => panic!("route table is invalid: {e}"),
});

/// Builds a fresh registry from [`ROUTE_TABLE`]
pub fn build_registry() -> Result<RouteRegistry<View>, RegistryError> {
    RouteRegistry::new(
        ROUTE_TABLE
            .iter()
            .map(|&(path, view)| RouteEntry::new(path, view).with_name(view.slug())),
    )
}

/// Process-wide registry, built on first use
pub fn registry() -> &'static RouteRegistry<View> {
    &REGISTRY
}

/// Matcher over the process-wide registry
pub fn matcher(case_insensitive: bool) -> Router<View> {
    Router::from_registry(registry()).with_case_sensitivity(case_insensitive)
}

/// Creates a navigator from a history strategy and the site's routes
pub fn create_router<H: History>(history: H, options: NavigatorOptions) -> Navigator<View, H> {
    Navigator::new(history, registry(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_routed_view_once() {
        let views: Vec<View> = ROUTE_TABLE.iter().map(|&(_, view)| view).collect();
        assert_eq!(views, View::ROUTED.to_vec());
    }

    #[test]
    fn test_registry_builds() {
        assert_eq!(registry().len(), ROUTE_TABLE.len());
    }
}
