//! Parameter-string builder
//!
//! Callers hand the resolver a raw parameter string: path values joined
//! with `/`, optionally followed by a `?`-prefixed query. Assembling that
//! string by hand goes wrong as soon as a value contains a reserved
//! character, so this builder percent-encodes every value on the way in.

use urlencoding::encode;

/// Builds the raw parameter string accepted by
/// [`NavigationService::navigate`](crate::NavigationService::navigate).
///
/// Path values and query pairs are percent-encoded with
/// [`urlencoding::encode`], keeping the final URI byte-exact.
///
/// # Examples
///
/// ```
/// use veld_navigation::NavigationParams;
///
/// let params = NavigationParams::new()
///     .path("1")
///     .path("101")
///     .query("filter", "recent")
///     .query("sort", "desc")
///     .build();
/// assert_eq!(params, "1/101?filter=recent&sort=desc");
///
/// let params = NavigationParams::new().path("a b/c").build();
/// assert_eq!(params, "a%20b%2Fc");
///
/// assert_eq!(NavigationParams::new().build(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavigationParams {
    path: Vec<String>,
    query: Vec<(String, String)>,
}

impl NavigationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one path value (one placeholder's worth).
    pub fn path(mut self, value: impl AsRef<str>) -> Self {
        self.path.push(encode(value.as_ref()).into_owned());
        self
    }

    /// Appends one query pair.
    pub fn query(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.query.push((
            encode(key.as_ref()).into_owned(),
            encode(value.as_ref()).into_owned(),
        ));
        self
    }

    /// Produces `v1/v2`, `?k=v`, `v1/v2?k=v` or an empty string.
    pub fn build(self) -> String {
        let path = self.path.join("/");
        if self.query.is_empty() {
            return path;
        }

        let query: Vec<String> = self
            .query
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{path}?{}", query.join("&"))
    }
}
