//! Error types for pattern parsing, registry construction and navigation
//!
//! Matching itself never fails: a path that no route accepts resolves to
//! [`Resolution::NotFound`](crate::Resolution::NotFound).

use thiserror::Error;

/// Errors raised while parsing a route pattern such as `/order/:id`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error("pattern `{0}` must not end with `/`")]
    TrailingSlash(String),

    #[error("pattern `{0}` has a parameter without a name")]
    EmptyParamName(String),

    #[error("pattern `{pattern}` has an invalid parameter name `{name}`")]
    InvalidParamName { pattern: String, name: String },

    #[error("pattern `{pattern}` binds parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// Errors raised while building a [`RouteRegistry`](crate::RouteRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid route `{path}`: {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: PatternError,
    },

    #[error("route `{0}` is declared more than once")]
    DuplicatePath(String),

    #[error("route `{path}` matches the same URLs as `{existing}`")]
    ConflictingPattern { path: String, existing: String },

    #[error("route name `{name}` is used by both `{existing}` and `{path}`")]
    DuplicateName {
        name: String,
        path: String,
        existing: String,
    },

    #[error("route table has no root `/` entry")]
    MissingRoot,
}

/// Errors returned by [`Navigator`](crate::Navigator) navigation calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation target `{0}` is not an absolute path")]
    InvalidTarget(String),

    #[error("already at `{0}`")]
    Duplicated(String),
}
