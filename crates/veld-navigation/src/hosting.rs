//! Hosting context
//!
//! The application may be served at the root, at a statically configured
//! sub-path, or at a sub-path assigned dynamically by a reverse proxy. The
//! resolver needs to know the active prefix so it never ends up in the
//! final URI twice. Helpers here are pure functions.

/// Where the application is hosted right now.
///
/// Implemented by the embedder; typically backed by whatever the platform
/// navigation layer reports as the current base URI.
pub trait HostingContext {
    /// The current base URI: scheme + host + path of the application root
    /// as observed at runtime, e.g. `https://host/fu/bar/`.
    fn base_uri(&self) -> String;

    /// Statically configured hosting prefix.
    ///
    /// Legacy configuration knob, honored for backward compatibility. It
    /// takes priority over the base-URI path when present.
    fn static_prefix(&self) -> Option<String> {
        None
    }

    /// The active hosting prefix, trimmed of surrounding slashes.
    ///
    /// Priority: configured static prefix, else the local path portion of
    /// the current base URI, else none (root hosting).
    fn active_prefix(&self) -> Option<String> {
        if let Some(prefix) = self.static_prefix() {
            let normalized = normalize_prefix(&prefix);
            if !normalized.is_empty() {
                return Some(normalized);
            }
        }
        base_path_of(&self.base_uri())
    }
}

/// Strips surrounding slashes so `/fu/bar`, `fu/bar/` and `fu/bar` are the
/// same prefix.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_matches('/').to_string()
}

/// Local path portion of an absolute base URI, trimmed of surrounding
/// slashes.
///
/// Returns `None` for root hosting (empty path).
///
/// # Examples
///
/// ```
/// use veld_navigation::base_path_of;
///
/// assert_eq!(base_path_of("https://host/fu/bar/"), Some("fu/bar".to_string()));
/// assert_eq!(base_path_of("https://host/"), None);
/// assert_eq!(base_path_of("https://host"), None);
/// ```
pub fn base_path_of(base_uri: &str) -> Option<String> {
    let after_scheme = match base_uri.find("://") {
        Some(idx) => &base_uri[idx + 3..],
        None => base_uri,
    };
    let path = &after_scheme[after_scheme.find('/')?..];
    // A base URI should not carry a query or fragment, but be safe.
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Plain-value hosting context for embedders and tests.
#[derive(Debug, Clone)]
pub struct StaticHost {
    base_uri: String,
    prefix: Option<String>,
}

impl StaticHost {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            prefix: None,
        }
    }

    /// Sets the legacy static prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl HostingContext for StaticHost {
    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }

    fn static_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }
}
