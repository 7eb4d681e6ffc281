//! Browser-navigation seam
//!
//! This subsystem only *produces* URIs; performing the navigation is the
//! platform's job. [`Navigator`] is the seam, [`MemoryNavigator`] the
//! in-process recorder used in tests and headless embedders.

use std::sync::Mutex;

/// Options forwarded to the platform navigation primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Bypass client-side routing and force a full load.
    pub force_load: bool,
    /// Replace the current history entry instead of pushing one.
    pub replace: bool,
}

/// The browser/UI navigation primitive.
pub trait Navigator {
    fn navigate_to(&self, uri: &str, options: NavigationOptions);
}

/// Records navigations instead of performing them.
///
/// # Examples
///
/// ```
/// use veld_navigation::{MemoryNavigator, NavigationOptions, Navigator};
///
/// let navigator = MemoryNavigator::new();
/// navigator.navigate_to("users/1", NavigationOptions::default());
/// assert_eq!(navigator.last_uri().as_deref(), Some("users/1"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    visits: Mutex<Vec<(String, NavigationOptions)>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded navigation, in order.
    pub fn visits(&self) -> Vec<(String, NavigationOptions)> {
        self.lock().clone()
    }

    /// URI of the most recent navigation, if any.
    pub fn last_uri(&self) -> Option<String> {
        self.lock().last().map(|(uri, _)| uri.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, NavigationOptions)>> {
        self.visits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for MemoryNavigator {
    fn navigate_to(&self, uri: &str, options: NavigationOptions) {
        self.lock().push((uri.to_string(), options));
    }
}
