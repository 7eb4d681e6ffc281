//! Typed failures
//!
//! Only two conditions terminate a navigation operation: an unknown target
//! and a structurally malformed template caught at table construction.
//! Everything else in the subsystem degrades with a deterministic fallback
//! and at most a diagnostic-level report.

use thiserror::Error;
use veld_router::StructuralIssue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The view-model identity has no entry in the route table.
    #[error("no route registered for view `{0}`")]
    RouteNotFound(String),

    /// The opaque key has no entry in the route table.
    #[error("no route registered for key `{0}`")]
    KeyNotFound(String),

    /// A pattern failed the structural rules (catch-all placement).
    /// Rejected when the table is built, never deferred to selection time.
    #[error("invalid route pattern `{pattern}` registered for {owner}: {issue}")]
    MalformedTemplate {
        pattern: String,
        owner: String,
        issue: StructuralIssue,
    },
}
