//! # Exchange Router
//!
//! Route matching and navigation for the exchange site:
//! - Static routes (`/terms`)
//! - Named parameters (`/order/:id`)
//! - Specificity ranking (static before dynamic, ties keep declaration order)
//! - A validated, immutable [`RouteRegistry`]
//! - History strategies ([`MemoryHistory`]) driven by a [`Navigator`]
//!
//! ## Path Normalization
//!
//! Paths are normalized before matching:
//! - Trailing slashes: `/kyc/` → `/kyc`
//! - Double slashes: `/docs//how-it-works` → `/docs/how-it-works`
//! - Backslashes: `\order\1` → `/order/1`
//!
//! ## Unmatched paths
//!
//! Matching never fails. A path no route accepts resolves to
//! [`Resolution::NotFound`], leaving the fallback view to the caller.
//!
//! ## Example
//!
//! ```
//! use exchange_router::{MemoryHistory, Navigator, RouteEntry, RouteRegistry};
//!
//! let registry = RouteRegistry::new([
//!     RouteEntry::new("/", "main"),
//!     RouteEntry::new("/exchange", "exchange"),
//!     RouteEntry::new("/order/:id", "order"),
//! ])
//! .unwrap();
//!
//! let mut nav = Navigator::new(MemoryHistory::new(), &registry, Default::default());
//! let resolved = nav.push("/order/123").unwrap();
//! assert_eq!(resolved.view(), Some(&"order"));
//! assert_eq!(resolved.param("id"), Some("123"));
//!
//! assert!(nav.resolve("/does-not-exist").is_not_found());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod history;
pub mod location;
pub mod navigator;
pub mod path;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod router;

pub use error::{NavigationError, PatternError, RegistryError};
pub use history::{History, HistoryState, MemoryHistory};
pub use location::Location;
pub use navigator::{Navigator, NavigatorOptions};
pub use path::{is_valid_path, normalize_path};
pub use pattern::{Params, PathPattern, Segment};
pub use registry::{RouteEntry, RouteRegistry};
pub use route::{Route, RouteMatch};
pub use router::{Resolution, Router};
