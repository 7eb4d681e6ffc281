//! Route table
//!
//! Built exactly once at startup from the registration list, then treated
//! as immutable: every accessor takes `&self`, there is no interior
//! mutability, and concurrent reads need no locking. Picking up new
//! registrations means building a fresh table.

use std::collections::HashMap;

use tracing::{debug, warn};
use veld_router::{parse_many, RouteTemplateCollection};

use crate::error::NavigationError;
use crate::hosting::normalize_prefix;
use crate::target::{NavTarget, RouteRegistration, ViewId};

/// Lookup table from navigation targets to their route templates.
///
/// Two keyspaces, structurally identical: strongly-typed view identities
/// and opaque string keys. Single-route views (`route_for*`) are derived
/// from the collection's primary template rather than stored separately.
///
/// # Examples
///
/// ```
/// use veld_navigation::{RouteRegistration, RouteTable, ViewId};
///
/// struct UsersView;
///
/// let table = RouteTable::build(
///     vec![
///         RouteRegistration::view::<UsersView>(&["/users", "/users/{id}"]),
///         RouteRegistration::keyed("help", &["/help/{*topic}"]),
///     ],
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(table.route_for(ViewId::of::<UsersView>()), Some("/users"));
/// assert_eq!(table.route_for_key("help"), Some("/help/{*topic}"));
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    views: HashMap<ViewId, RouteTemplateCollection>,
    keys: HashMap<String, RouteTemplateCollection>,
}

impl RouteTable {
    /// Builds the table from the scan result.
    ///
    /// When `static_prefix` is configured it is prepended to every pattern
    /// before parsing (legacy behavior, retained for backward
    /// compatibility; prefer leaving it `None` and letting the resolver
    /// handle the base-URI prefix).
    ///
    /// Policies:
    /// - A structurally malformed pattern (catch-all placement) aborts
    ///   construction with [`NavigationError::MalformedTemplate`] naming
    ///   the pattern and the owning target.
    /// - A duplicate target keeps the first registration; the collision is
    ///   reported at warning level and the colliding entry is dropped
    ///   entirely, never merged.
    /// - An empty pattern list is skipped with a warning.
    pub fn build(
        registrations: impl IntoIterator<Item = RouteRegistration>,
        static_prefix: Option<&str>,
    ) -> Result<Self, NavigationError> {
        let prefix = static_prefix
            .map(normalize_prefix)
            .filter(|p| !p.is_empty());

        let mut views = HashMap::new();
        let mut keys = HashMap::new();

        for registration in registrations {
            let RouteRegistration { target, patterns } = registration;

            if patterns.is_empty() {
                warn!(registration = %target, "registration has no route patterns, skipping");
                continue;
            }

            let prefixed: Vec<String> = patterns
                .iter()
                .map(|p| apply_prefix(prefix.as_deref(), p))
                .collect();
            let templates = parse_many(prefixed.iter().map(String::as_str));

            for template in &templates {
                if let Some(issue) = template.structural_issue() {
                    return Err(NavigationError::MalformedTemplate {
                        pattern: template.pattern().to_string(),
                        owner: target.to_string(),
                        issue,
                    });
                }
            }

            let Some(collection) = RouteTemplateCollection::new(templates) else {
                continue;
            };

            match target {
                NavTarget::View(id) => {
                    if views.contains_key(&id) {
                        warn!(view = %id, "duplicate route registration, keeping the first");
                        continue;
                    }
                    views.insert(id, collection);
                }
                NavTarget::Key(key) => {
                    if keys.contains_key(&key) {
                        warn!(%key, "duplicate route registration, keeping the first");
                        continue;
                    }
                    keys.insert(key, collection);
                }
            }
        }

        debug!(
            views = views.len(),
            keys = keys.len(),
            "route table built"
        );
        Ok(Self { views, keys })
    }

    /// Primary route pattern for a view identity.
    pub fn route_for(&self, id: ViewId) -> Option<&str> {
        self.views.get(&id).map(|c| c.primary_route())
    }

    /// Primary route pattern for an opaque key.
    pub fn route_for_key(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(|c| c.primary_route())
    }

    /// All templates registered for a view identity.
    pub fn collection_for(&self, id: ViewId) -> Option<&RouteTemplateCollection> {
        self.views.get(&id)
    }

    /// All templates registered for an opaque key.
    pub fn collection_for_key(&self, key: &str) -> Option<&RouteTemplateCollection> {
        self.keys.get(key)
    }

    /// Number of registered targets across both keyspaces.
    pub fn len(&self) -> usize {
        self.views.len() + self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty() && self.keys.is_empty()
    }
}

/// Roots the pattern and prepends the legacy static prefix when configured.
fn apply_prefix(prefix: Option<&str>, pattern: &str) -> String {
    let rooted = if pattern.starts_with('/') {
        pattern.to_string()
    } else {
        format!("/{pattern}")
    };

    match prefix {
        None => rooted,
        Some(p) if rooted == "/" => format!("/{p}"),
        Some(p) => format!("/{p}{rooted}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FirstView;
    struct SecondView;

    #[test]
    fn duplicate_view_keeps_first_registration() {
        let table = RouteTable::build(
            vec![
                RouteRegistration::view::<FirstView>(&["/first"]),
                RouteRegistration::view::<FirstView>(&["/shadowed"]),
            ],
            None,
        )
        .unwrap();

        assert_eq!(table.route_for(ViewId::of::<FirstView>()), Some("/first"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn duplicate_key_keeps_first_registration() {
        let table = RouteTable::build(
            vec![
                RouteRegistration::keyed("home", &["/"]),
                RouteRegistration::keyed("home", &["/elsewhere"]),
            ],
            None,
        )
        .unwrap();

        assert_eq!(table.route_for_key("home"), Some("/"));
    }

    #[test]
    fn malformed_catch_all_aborts_construction() {
        let err = RouteTable::build(
            vec![RouteRegistration::view::<FirstView>(&["/a/{*rest}/{id}"])],
            None,
        )
        .unwrap_err();

        match err {
            NavigationError::MalformedTemplate { pattern, owner, .. } => {
                assert_eq!(pattern, "/a/{*rest}/{id}");
                assert!(owner.contains("FirstView"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn static_prefix_is_prepended_before_parsing() {
        let table = RouteTable::build(
            vec![
                RouteRegistration::view::<FirstView>(&["/counter"]),
                RouteRegistration::view::<SecondView>(&["/"]),
            ],
            Some("/fu/bar/"),
        )
        .unwrap();

        assert_eq!(
            table.route_for(ViewId::of::<FirstView>()),
            Some("/fu/bar/counter")
        );
        assert_eq!(table.route_for(ViewId::of::<SecondView>()), Some("/fu/bar"));
    }

    #[test]
    fn unrooted_patterns_are_rooted() {
        let table = RouteTable::build(
            vec![RouteRegistration::keyed("docs", &["docs/{*slug}"])],
            None,
        )
        .unwrap();

        assert_eq!(table.route_for_key("docs"), Some("/docs/{*slug}"));
    }

    #[test]
    fn empty_pattern_list_is_skipped() {
        let table = RouteTable::build(
            vec![RouteRegistration::keyed("nothing", &[])],
            None,
        )
        .unwrap();

        assert!(table.is_empty());
    }
}
