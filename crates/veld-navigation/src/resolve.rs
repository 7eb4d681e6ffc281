//! Navigation resolver
//!
//! Two pure transformations: positional placeholder substitution over a
//! template's pattern text, and the hosting-prefix algebra that turns the
//! substituted absolute route into the relative path handed to the
//! browser-navigation primitive. The primitive recombines that relative
//! path with the current base URI, which already carries the active
//! prefix, so the prefix must never survive into the output.

use std::borrow::Cow;

use veld_router::{placeholder_spans, RouteTemplate};

/// Resolves a template and raw parameter string into the final
/// host-relative URI.
///
/// Substitution rules:
/// - Placeholders are located positionally, left to right.
/// - The path portion of `raw_parameters` (before the first `?`) is split
///   on `/`, empty segments ignored, and the values replace placeholders
///   in order. A catch-all placeholder absorbs all remaining values,
///   joined with `/`.
/// - Fewer values than placeholders is not an error: trailing placeholders
///   stay literal ("navigate with defaults" degrades gracefully).
/// - Any query portion (from the first `?` onward) is appended verbatim,
///   after the prefix algebra has run on the path.
///
/// Prefix rules, applied to the substituted `/`-rooted route:
/// - The root route `/` resolves to the empty relative path.
/// - With an active prefix `p`: a route equal to `/p` collapses to the
///   root; `/p/rest` strips to `rest`; a route that does not start with
///   the prefix (configuration mismatch) just loses its single leading
///   `/`: no double-stripping, no error.
/// - With no prefix the single leading `/` is stripped.
///
/// # Examples
///
/// ```
/// use veld_navigation::{parse, resolve_uri};
///
/// let template = parse("/users/{userId}/posts/{postId}");
/// assert_eq!(
///     resolve_uri(&template, Some("1/101"), None),
///     "users/1/posts/101",
/// );
/// assert_eq!(
///     resolve_uri(&template, Some("1/101?filter=recent&sort=desc"), None),
///     "users/1/posts/101?filter=recent&sort=desc",
/// );
///
/// let counter = parse("/fu/bar/counter");
/// assert_eq!(resolve_uri(&counter, None, Some("fu/bar")), "counter");
/// ```
pub fn resolve_uri(
    template: &RouteTemplate,
    raw_parameters: Option<&str>,
    active_prefix: Option<&str>,
) -> String {
    let (values, query) = split_parameters(raw_parameters);
    let substituted = substitute(template, &values);
    // The prefix algebra compares whole paths. The query tail must not take
    // part in that comparison, so it is re-appended afterwards.
    let mut relative = make_relative(&substituted, active_prefix);
    if let Some(query) = query {
        relative.push_str(query);
    }
    relative
}

/// Splits a raw parameter string into path values and the verbatim query
/// tail (including its `?`).
fn split_parameters(raw: Option<&str>) -> (Vec<&str>, Option<&str>) {
    let Some(raw) = raw else {
        return (Vec::new(), None);
    };
    let (path_part, query) = match raw.find('?') {
        Some(idx) => (&raw[..idx], Some(&raw[idx..])),
        None => (raw, None),
    };
    let values = path_part.split('/').filter(|s| !s.is_empty()).collect();
    (values, query)
}

/// Replaces placeholders positionally.
fn substitute(template: &RouteTemplate, values: &[&str]) -> String {
    let pattern = template.pattern();
    let mut out = String::with_capacity(pattern.len());
    let mut cursor = 0;
    let mut next_value = 0;

    for (span, parameter) in placeholder_spans(pattern)
        .into_iter()
        .zip(template.parameters())
    {
        out.push_str(&pattern[cursor..span.start]);
        if parameter.is_catch_all() && next_value < values.len() {
            // The catch-all absorbs every remaining value.
            out.push_str(&values[next_value..].join("/"));
            next_value = values.len();
        } else if next_value < values.len() {
            out.push_str(values[next_value]);
            next_value += 1;
        } else {
            // Ran out of values: keep the placeholder literal.
            out.push_str(&pattern[span.clone()]);
        }
        cursor = span.end;
    }
    out.push_str(&pattern[cursor..]);
    out
}

/// Applies the hosting-prefix algebra and strips the leading slash.
fn make_relative(route: &str, active_prefix: Option<&str>) -> String {
    let rooted: Cow<'_, str> = if route.starts_with('/') {
        Cow::Borrowed(route)
    } else {
        Cow::Owned(format!("/{route}"))
    };

    if rooted.as_ref() == "/" {
        return String::new();
    }

    if let Some(prefix) = active_prefix {
        let prefix = prefix.trim_matches('/');
        if !prefix.is_empty() {
            let exact = format!("/{prefix}");
            if rooted.as_ref() == exact {
                return String::new();
            }
            if let Some(rest) = rooted.strip_prefix(&format!("/{prefix}/")) {
                return rest.to_string();
            }
            // Prefix mismatch: fall through to plain relative resolution.
        }
    }

    rooted
        .strip_prefix('/')
        .unwrap_or(rooted.as_ref())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use veld_router::parse;

    #[test]
    fn substitution_is_total_with_matching_values() {
        let template = parse("/users/{userId}/posts/{postId}");
        let uri = resolve_uri(&template, Some("1/101"), None);
        assert_eq!(uri, "users/1/posts/101");
        assert!(!uri.contains('{') && !uri.contains('}'));
    }

    #[test]
    fn missing_values_leave_placeholders_literal() {
        let template = parse("/users/{userId}/posts/{postId}");
        assert_eq!(resolve_uri(&template, Some("1"), None), "users/1/posts/{postId}");
        assert_eq!(
            resolve_uri(&template, None, None),
            "users/{userId}/posts/{postId}"
        );
    }

    #[test]
    fn catch_all_absorbs_remaining_values() {
        let template = parse("/files/{*path}");
        assert_eq!(resolve_uri(&template, Some("a/b/c"), None), "files/a/b/c");
    }

    #[test]
    fn query_tail_is_appended_verbatim() {
        let template = parse("/items/{id}");
        assert_eq!(
            resolve_uri(&template, Some("7?sort=desc&page=2"), None),
            "items/7?sort=desc&page=2"
        );
    }

    #[test]
    fn query_only_parameters_keep_placeholders() {
        let template = parse("/items/{id?}");
        assert_eq!(resolve_uri(&template, Some("?sort=desc"), None), "items/{id?}?sort=desc");
    }

    #[test]
    fn root_route_resolves_to_hosting_root() {
        let template = parse("/");
        assert_eq!(resolve_uri(&template, None, None), "");
    }

    #[test]
    fn prefix_is_stripped_once() {
        let template = parse("/fu/bar/counter");
        assert_eq!(resolve_uri(&template, None, Some("fu/bar")), "counter");
        assert_eq!(resolve_uri(&template, None, Some("/fu/bar/")), "counter");
    }

    #[test]
    fn exact_prefix_match_collapses_to_root() {
        let template = parse("/fu/bar");
        assert_eq!(resolve_uri(&template, None, Some("fu/bar")), "");
    }

    #[test]
    fn query_on_exact_prefix_route_collapses_to_root() {
        let template = parse("/fu/bar");
        let uri = resolve_uri(&template, Some("?tab=1"), Some("fu/bar"));
        assert_eq!(uri, "?tab=1");
    }

    #[test]
    fn query_survives_prefix_stripping() {
        let template = parse("/fu/bar/counter");
        assert_eq!(
            resolve_uri(&template, Some("?tab=1"), Some("fu/bar")),
            "counter?tab=1"
        );
    }

    #[test]
    fn prefix_mismatch_falls_back_to_plain_relative() {
        let template = parse("/other/place");
        assert_eq!(resolve_uri(&template, None, Some("fu/bar")), "other/place");
    }

    #[test]
    fn prefix_must_match_whole_segments() {
        // `/fubar` must not be treated as carrying the `/fu` prefix.
        let template = parse("/fubar/x");
        assert_eq!(resolve_uri(&template, None, Some("fu")), "fubar/x");
    }
}
