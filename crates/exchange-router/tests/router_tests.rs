//! Integration tests for exchange-router
//!
//! Tests are organized by feature area:
//! - Pattern matching (static, parameterized, normalization)
//! - Specificity ranking
//! - Registry validation
//! - Named routes
//! - Navigation over a memory history

use exchange_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn registry() -> RouteRegistry<&'static str> {
    RouteRegistry::new([
        RouteEntry::new("/", "main").with_name("main"),
        RouteEntry::new("/exchange", "exchange").with_name("exchange"),
        RouteEntry::new("/docs/how-it-works", "how-it-works"),
        RouteEntry::new("/order/:id", "order").with_name("order"),
    ])
    .unwrap()
}

// ============================================================================
// Matching
// ============================================================================

#[rstest]
#[case("/", "main")]
#[case("/exchange", "exchange")]
#[case("/exchange/", "exchange")]
#[case("//exchange", "exchange")]
#[case("/docs/how-it-works", "how-it-works")]
#[case("/docs//how-it-works/", "how-it-works")]
#[case("/order/123", "order")]
fn test_paths_resolve_to_view(#[case] path: &str, #[case] view: &str) {
    let router = Router::from_registry(&registry());
    assert_eq!(router.resolve(path).view(), Some(&view));
}

#[rstest]
#[case("/order")]
#[case("/order/")]
#[case("/order/1/2")]
#[case("/docs")]
#[case("/does-not-exist")]
#[case("/EXCHANGE")]
fn test_paths_without_route(#[case] path: &str) {
    let router = Router::from_registry(&registry());
    assert!(router.resolve(path).is_not_found());
}

#[test]
fn test_param_binding() {
    let router = Router::from_registry(&registry());
    let m = router.match_route("/order/abc-123").unwrap();
    assert_eq!(m.route.pattern.as_str(), "/order/:id");
    assert_eq!(m.params.len(), 1);
    assert_eq!(m.param("id"), Some("abc-123"));
}

#[test]
fn test_param_is_percent_decoded() {
    let router = Router::from_registry(&registry());
    assert_eq!(router.resolve("/order/x%2Fy").param("id"), Some("x/y"));
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_static_beats_param_regardless_of_order() {
    let router = Router::new()
        .with_route(Route::new("/order/:id", "order").unwrap())
        .with_route(Route::new("/order/new", "new-order").unwrap());

    assert_eq!(router.resolve("/order/new").view(), Some(&"new-order"));
    assert_eq!(router.resolve("/order/old").view(), Some(&"order"));
}

#[test]
fn test_equal_priority_keeps_declaration_order() {
    let router = Router::new()
        .with_route(Route::new("/b", "b").unwrap())
        .with_route(Route::new("/a", "a").unwrap());

    let patterns: Vec<&str> = router.routes().iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["/b", "/a"]);
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_build_is_idempotent() {
    assert_eq!(registry(), registry());
}

#[test]
fn test_registry_lookup_is_literal() {
    let registry = registry();
    assert!(registry.contains_path("/order/:id"));
    assert!(!registry.contains_path("/order/1"));
    assert_eq!(registry.view_for_path("/exchange"), Some(&"exchange"));
    assert_eq!(registry.view_for_path("/nope"), None);
}

#[test]
fn test_registry_error_messages() {
    let err = RouteRegistry::new([RouteEntry::new("/", ()), RouteEntry::new("/", ())]).unwrap_err();
    assert_eq!(err.to_string(), "route `/` is declared more than once");

    let err = RouteRegistry::<()>::new([]).unwrap_err();
    assert_eq!(err.to_string(), "route table has no root `/` entry");
}

// ============================================================================
// Named routes
// ============================================================================

#[test]
fn test_url_for_named_routes() {
    let router = Router::from_registry(&registry());
    assert_eq!(router.url_for_params("main", &[]).as_deref(), Some("/"));
    assert_eq!(
        router.url_for_params("order", &[("id", "7")]).as_deref(),
        Some("/order/7")
    );
    assert_eq!(router.url_for_params("missing", &[]), None);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_walk() {
    let registry = registry();
    let mut nav = Navigator::new(MemoryHistory::new(), &registry, NavigatorOptions::default());

    nav.push("/exchange").unwrap();
    nav.push("/order/9?from=mail#summary").unwrap();
    assert_eq!(nav.current().param("id"), Some("9"));
    assert_eq!(nav.location().query_value("from"), Some("mail"));
    assert_eq!(nav.href(), "/order/9?from=mail#summary");

    assert_eq!(nav.go(-2).and_then(|r| r.view()), Some(&"main"));
    assert_eq!(nav.forward().and_then(|r| r.view()), Some(&"exchange"));
    assert!(nav.go(5).is_none());
    assert_eq!(nav.location().path, "/exchange");
}

#[test]
fn test_navigation_under_base() {
    let registry = registry();
    let mut nav = Navigator::new(MemoryHistory::with_base("/app"), &registry, NavigatorOptions::default());

    nav.push("/exchange").unwrap();
    assert_eq!(nav.location().path, "/exchange");
    assert_eq!(nav.href(), "/app/exchange");
}

#[test]
fn test_case_insensitive_navigation() {
    let registry = registry();
    let options = NavigatorOptions {
        case_insensitive: true,
    };
    let mut nav = Navigator::new(MemoryHistory::new(), &registry, options);

    assert_eq!(nav.push("/Exchange").unwrap().view(), Some(&"exchange"));
}

#[test]
fn test_initial_location_is_resolved() {
    let registry = registry();
    let history = MemoryHistory::starting_at("/", Location::parse("/order/1"));
    let nav = Navigator::new(history, &registry, NavigatorOptions::default());
    assert_eq!(nav.current().view(), Some(&"order"));
}
