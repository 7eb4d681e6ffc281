//! # Veld Router
//!
//! A zero-dependency route-template library for view-model navigation with
//! support for:
//! - Static templates (`/about`)
//! - Required parameters (`/users/{id}`)
//! - Optional parameters (`/posts/{id?}`)
//! - Catch-all parameters (`/docs/{*slug}`)
//! - Constrained parameters (`/orders/{id:int}`, constraint kept as-is)
//!
//! Templates are parsed once into immutable values; picking the best
//! template for a given parameter string is a pure function over those
//! values. There is no inbound request matching here; this crate only
//! describes outbound navigation targets.
//!
//! ## Example
//!
//! ```
//! use veld_router::{parse, select_best_template, RouteTemplateCollection};
//!
//! let templates = veld_router::parse_many(["/test", "/test/{echo}"]);
//! let collection = RouteTemplateCollection::new(templates).unwrap();
//!
//! // No parameters: the simplest registered template wins.
//! assert_eq!(select_best_template(&collection, None).pattern(), "/test");
//!
//! // One path value: the one-parameter template fits.
//! assert_eq!(
//!     select_best_template(&collection, Some("hello")).pattern(),
//!     "/test/{echo}",
//! );
//!
//! let template = parse("/users/{userId}/posts/{postId}");
//! assert_eq!(template.parameter_count(), 2);
//! ```

use std::fmt;

// ============================================================================
// Module Declarations
// ============================================================================

mod select;
pub mod template;

pub use select::select_best_template;
pub use template::{parse, parse_many, placeholder_spans};

// ============================================================================
// Core Types
// ============================================================================

/// A single placeholder extracted from a route template.
///
/// Immutable value type. The `constraint` text (`{id:int}` → `"int"`) is
/// informational pass-through: this crate records it but never evaluates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParameter {
    name: String,
    optional: bool,
    catch_all: bool,
    constraint: Option<String>,
}

impl RouteParameter {
    pub(crate) fn new(
        name: String,
        optional: bool,
        catch_all: bool,
        constraint: Option<String>,
    ) -> Self {
        Self {
            name,
            optional,
            catch_all,
            constraint,
        }
    }

    /// Parameter name, the word between the braces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for `{name?}` (and for `{name:constraint?}`).
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// True for `{*name}`.
    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Constraint text after `:`, if any.
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }
}

/// A structural problem detected in an otherwise well-formed template.
///
/// Reported by [`RouteTemplate::structural_issue`]; callers that build
/// lookup tables are expected to reject such templates at construction
/// time instead of deferring to selection-time surprises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralIssue {
    /// A catch-all parameter is not the final parameter of the template.
    CatchAllNotLast { name: String },
    /// More than one catch-all parameter in the same template.
    MultipleCatchAlls { first: String, second: String },
}

impl fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralIssue::CatchAllNotLast { name } => {
                write!(f, "catch-all parameter `{name}` must be the final parameter")
            }
            StructuralIssue::MultipleCatchAlls { first, second } => {
                write!(
                    f,
                    "template declares more than one catch-all parameter (`{first}`, `{second}`)"
                )
            }
        }
    }
}

/// A parsed route template: the original pattern text plus its placeholders
/// in left-to-right order.
///
/// Built by [`parse`]; immutable afterwards. Parameter counts are derived,
/// not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    pattern: String,
    parameters: Vec<RouteParameter>,
}

impl RouteTemplate {
    pub(crate) fn new(pattern: String, parameters: Vec<RouteParameter>) -> Self {
        Self {
            pattern,
            parameters,
        }
    }

    /// The original template text, e.g. `/users/{userId}/posts/{postId}`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Placeholders in pattern order.
    pub fn parameters(&self) -> &[RouteParameter] {
        &self.parameters
    }

    /// Total number of placeholders.
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Number of placeholders that are not optional.
    pub fn required_parameter_count(&self) -> usize {
        self.parameters.iter().filter(|p| !p.optional).count()
    }

    /// Number of optional placeholders.
    pub fn optional_parameter_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.optional).count()
    }

    /// True if any placeholder is a catch-all.
    pub fn has_catch_all(&self) -> bool {
        self.parameters.iter().any(|p| p.catch_all)
    }

    /// Checks the catch-all placement rules.
    ///
    /// Returns `None` for a well-formed template. A catch-all must be the
    /// final parameter, and there can be at most one.
    pub fn structural_issue(&self) -> Option<StructuralIssue> {
        let mut catch_alls = self
            .parameters
            .iter()
            .enumerate()
            .filter(|(_, p)| p.catch_all);

        let (first_idx, first) = catch_alls.next()?;
        if let Some((_, second)) = catch_alls.next() {
            return Some(StructuralIssue::MultipleCatchAlls {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }
        if first_idx + 1 != self.parameters.len() {
            return Some(StructuralIssue::CatchAllNotLast {
                name: first.name.clone(),
            });
        }
        None
    }
}

/// All templates registered for one navigation target.
///
/// The primary template is the simplest one: fewest parameters, then
/// shortest pattern text, ties broken by registration order. Its pattern
/// always appears verbatim inside [`templates`](Self::templates).
///
/// ## Example
///
/// ```
/// use veld_router::RouteTemplateCollection;
///
/// let templates = veld_router::parse_many(["/users/{id}", "/users"]);
/// let collection = RouteTemplateCollection::new(templates).unwrap();
/// assert_eq!(collection.primary_route(), "/users");
/// assert_eq!(collection.templates().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplateCollection {
    templates: Vec<RouteTemplate>,
    primary: usize,
}

impl RouteTemplateCollection {
    /// Groups parsed templates and designates the primary one.
    ///
    /// Returns `None` for an empty template list; a target with no
    /// declared routes has no collection.
    pub fn new(templates: Vec<RouteTemplate>) -> Option<Self> {
        let primary = templates
            .iter()
            .enumerate()
            .min_by_key(|(_, t)| (t.parameter_count(), t.pattern().len()))
            .map(|(idx, _)| idx)?;

        Some(Self { templates, primary })
    }

    /// Pattern text of the primary (default) template.
    pub fn primary_route(&self) -> &str {
        self.templates[self.primary].pattern()
    }

    /// The primary (default) template itself.
    pub fn primary_template(&self) -> &RouteTemplate {
        &self.templates[self.primary]
    }

    /// All templates in registration order.
    pub fn templates(&self) -> &[RouteTemplate] {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_prefers_fewest_parameters() {
        let collection =
            RouteTemplateCollection::new(parse_many(["/users/{id}", "/users"])).unwrap();
        assert_eq!(collection.primary_route(), "/users");
    }

    #[test]
    fn primary_breaks_parameter_ties_by_pattern_length() {
        let collection =
            RouteTemplateCollection::new(parse_many(["/people/{id}", "/p/{id}"])).unwrap();
        assert_eq!(collection.primary_route(), "/p/{id}");
    }

    #[test]
    fn primary_breaks_full_ties_by_registration_order() {
        let collection =
            RouteTemplateCollection::new(parse_many(["/ab/{x}", "/cd/{x}"])).unwrap();
        assert_eq!(collection.primary_route(), "/ab/{x}");
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert!(RouteTemplateCollection::new(Vec::new()).is_none());
    }

    #[test]
    fn catch_all_must_be_last_parameter() {
        let template = parse("/a/{*rest}/{id}");
        assert_eq!(
            template.structural_issue(),
            Some(StructuralIssue::CatchAllNotLast {
                name: "rest".to_string()
            })
        );
    }

    #[test]
    fn single_trailing_catch_all_is_well_formed() {
        let template = parse("/docs/{*slug}");
        assert_eq!(template.structural_issue(), None);
    }

    #[test]
    fn two_catch_alls_are_rejected() {
        let template = parse("/{*a}/{*b}");
        assert!(matches!(
            template.structural_issue(),
            Some(StructuralIssue::MultipleCatchAlls { .. })
        ));
    }
}
