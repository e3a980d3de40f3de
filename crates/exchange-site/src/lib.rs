//! Exchange site: route table, page rendering and server
//!
//! The route table in [`routes`] is the whole navigable surface of the site.
//! Matching and history live in `exchange-router`; this crate supplies the
//! views, renders them with Maud and serves them over axum.

pub mod cli;
pub mod config;
pub mod pages;
pub mod routes;
pub mod server;
pub mod view;

pub use config::SiteConfig;
pub use routes::{build_registry, create_router, registry, ROUTE_TABLE};
pub use view::View;
