//! # Veld Navigation
//!
//! Turns "navigate to this view-model" intents into concrete,
//! environment-correct URIs, and builds the reverse lookup table at
//! startup from an externally supplied registration list.
//!
//! The pieces, bottom-up:
//! - [`RouteTable`]: built exactly once from `(target, patterns)` pairs,
//!   immutable afterwards, safe for unsynchronized concurrent reads.
//! - [`select_best_template`]: picks the best of several templates for a
//!   parameter string (re-exported from `veld-router`).
//! - [`resolve_uri`]: substitutes parameters and rewrites the hosting
//!   prefix so the final URI never carries it twice.
//! - [`NavigationService`]: the facade, with `uri_for` for link generation
//!   and `navigate` to hand the URI to the browser-navigation primitive.
//!
//! ## Example
//!
//! ```
//! use veld_navigation::{
//!     NavigationOptions, NavigationService, MemoryNavigator, RouteRegistration,
//!     RouteTable, StaticHost,
//! };
//!
//! struct PostsView;
//!
//! let table = RouteTable::build(
//!     vec![RouteRegistration::view::<PostsView>(&["/users/{userId}/posts/{postId}"])],
//!     None,
//! )
//! .unwrap();
//!
//! let service = NavigationService::new(
//!     table,
//!     StaticHost::new("https://host/"),
//!     MemoryNavigator::new(),
//! );
//!
//! service
//!     .navigate::<PostsView>(Some("1/101"), NavigationOptions::default())
//!     .unwrap();
//! assert_eq!(
//!     service.navigator().last_uri().as_deref(),
//!     Some("users/1/posts/101"),
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod hosting;
mod navigator;
mod params;
pub mod resolve;
mod service;
mod table;
mod target;

pub use error::NavigationError;
pub use hosting::{base_path_of, HostingContext, StaticHost};
pub use navigator::{MemoryNavigator, NavigationOptions, Navigator};
pub use params::NavigationParams;
pub use resolve::resolve_uri;
pub use service::NavigationService;
pub use table::RouteTable;
pub use target::{NavTarget, RouteRegistration, ViewId};

// Re-export the template core so embedders need a single dependency.
pub use veld_router::{
    parse, parse_many, placeholder_spans, select_best_template, RouteParameter, RouteTemplate,
    RouteTemplateCollection, StructuralIssue,
};
