//! Navigation targets
//!
//! A registration binds route patterns either to a strongly-typed
//! view-model identity ([`ViewId`]) or to an opaque string key. The table
//! consumes a finished registration list; discovery of which view-models
//! exist is the embedder's concern, not this crate's.

use std::any::{type_name, TypeId};
use std::fmt;

/// Strongly-typed view-model identity.
///
/// Wraps the `TypeId` for identity and keeps the type name purely for
/// diagnostics and error messages.
///
/// # Examples
///
/// ```
/// use veld_navigation::ViewId;
///
/// struct CounterView;
///
/// let a = ViewId::of::<CounterView>();
/// let b = ViewId::of::<CounterView>();
/// assert_eq!(a, b);
/// assert!(a.type_name().ends_with("CounterView"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId {
    id: TypeId,
    name: &'static str,
}

impl ViewId {
    /// Identity of the view-model type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Fully qualified type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// What a set of route patterns is registered for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// A strongly-typed view-model identity.
    View(ViewId),
    /// An opaque key for targets not tied to a static type.
    Key(String),
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::View(id) => write!(f, "view `{id}`"),
            NavTarget::Key(key) => write!(f, "key `{key}`"),
        }
    }
}

/// One entry of the scan result the table is built from.
#[derive(Debug, Clone)]
pub struct RouteRegistration {
    pub target: NavTarget,
    pub patterns: Vec<String>,
}

impl RouteRegistration {
    /// Registers patterns for the view-model type `T`.
    pub fn view<T: 'static>(patterns: &[&str]) -> Self {
        Self {
            target: NavTarget::View(ViewId::of::<T>()),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Registers patterns for an opaque key.
    pub fn keyed(key: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            target: NavTarget::Key(key.into()),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}
