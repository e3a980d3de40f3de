//! Maud rendering for resolved views
//!
//! Real page content lives with the front-end; this renders a layout shell
//! around a placeholder for the mounted view so the route table can be
//! browsed and checked end to end.

use exchange_router::{Resolution, RouteRegistry};
use maud::{html, Markup, DOCTYPE};

use crate::routes::ROUTE_TABLE;
use crate::view::View;

/// Renders the page for a resolution
///
/// `base` is prefixed to every navigation link (`/` for none).
pub fn render(resolution: &Resolution<View>, base: &str) -> Markup {
    match resolution {
        Resolution::Matched(m) => {
            let view = m.route.view;
            layout(view, base, view_body(view, m.param("id")))
        }
        Resolution::NotFound { path } => layout(View::NotFound, base, not_found_body(path)),
    }
}

fn layout(view: View, base: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (view.title()) }
            }
            body data-view=(view.slug()) {
                nav {
                    ul {
                        @for (path, linked) in nav_links() {
                            li {
                                a href=(exchange_router::path::join_base(base, path))
                                    aria-current=[(linked == view).then_some("page")] {
                                    (linked.title())
                                }
                            }
                        }
                    }
                }
                main { (body) }
            }
        }
    }
}

fn view_body(view: View, id: Option<&str>) -> Markup {
    html! {
        h1 { (view.title()) }
        @if let (View::Order, Some(id)) = (view, id) {
            p.order-id { "Order " code { (id) } }
        }
    }
}

fn not_found_body(path: &str) -> Markup {
    html! {
        h1 { (View::NotFound.title()) }
        p { "No page at " code { (path) } }
    }
}

fn nav_links() -> impl Iterator<Item = (&'static str, View)> {
    ROUTE_TABLE
        .iter()
        .copied()
        .filter(|&(_, view)| view.in_nav())
}

/// Route table as JSON-ready rows
pub fn manifest(registry: &RouteRegistry<View>) -> Vec<serde_json::Value> {
    registry
        .iter()
        .map(|entry| {
            serde_json::json!({
                "path": entry.path,
                "view": entry.view,
                "title": entry.view.title(),
            })
        })
        .collect()
}
