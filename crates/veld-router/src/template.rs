//! Template-pattern parsing
//!
//! Scans route patterns for placeholder spans delimited by `{` and `}` and
//! extracts them as typed parameters. All functions here are **pure**: same
//! input → same output, no side effects.
//!
//! ## Placeholder grammar
//!
//! Inside the braces:
//! - an optional leading `*` marks a catch-all,
//! - the following word characters (ASCII alphanumeric or `_`) form the
//!   parameter name,
//! - an optional trailing `?` marks the parameter optional,
//! - an optional `:` followed by any non-`}` text is the constraint
//!   (recorded verbatim, never evaluated; a trailing `?` on the constraint
//!   also marks the parameter optional).
//!
//! Spans that do not fit this grammar are **not** errors. They stay
//! literal text and contribute no parameter. This leniency is deliberate
//! and matches the wire format of common web-routing template conventions.

use std::ops::Range;

use crate::{RouteParameter, RouteTemplate};

/// Parses a route pattern into a [`RouteTemplate`].
///
/// Parameters come out in left-to-right placeholder order. A pattern with
/// no placeholders yields an empty parameter list. This function never
/// fails: the `&str` argument cannot be absent, and malformed placeholder
/// spans are treated as literal text.
///
/// # Examples
///
/// ```
/// use veld_router::parse;
///
/// let template = parse("/users/{userId}/posts/{postId}");
/// assert_eq!(template.parameter_count(), 2);
/// assert_eq!(template.parameters()[0].name(), "userId");
/// assert_eq!(template.parameters()[1].name(), "postId");
///
/// let template = parse("/docs/{*slug}");
/// assert!(template.has_catch_all());
///
/// let template = parse("/orders/{id:int}");
/// assert_eq!(template.parameters()[0].constraint(), Some("int"));
///
/// // No placeholders, no parameters.
/// assert_eq!(parse("/about").parameter_count(), 0);
/// ```
pub fn parse(pattern: &str) -> RouteTemplate {
    let parameters = placeholder_spans(pattern)
        .into_iter()
        .filter_map(|span| parse_placeholder(&pattern[span.start + 1..span.end - 1]))
        .collect();

    RouteTemplate::new(pattern.to_string(), parameters)
}

/// Parses a sequence of patterns, preserving order.
pub fn parse_many<'a, I>(patterns: I) -> Vec<RouteTemplate>
where
    I: IntoIterator<Item = &'a str>,
{
    patterns.into_iter().map(parse).collect()
}

/// Byte ranges of every recognized `{...}` placeholder, left to right.
///
/// Only spans whose content fits the placeholder grammar are returned, so
/// the ranges line up one-to-one with [`RouteTemplate::parameters`]. The
/// resolver uses this for positional substitution.
///
/// # Examples
///
/// ```
/// use veld_router::placeholder_spans;
///
/// let spans = placeholder_spans("/users/{id}");
/// assert_eq!(spans, vec![7..11]);
///
/// // Malformed spans are literal text.
/// assert!(placeholder_spans("/odd/{}/path").is_empty());
/// ```
pub fn placeholder_spans(pattern: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut i = 0;
    let bytes = pattern.as_bytes();

    while i < bytes.len() {
        if bytes[i] == b'{' {
            if let Some(offset) = pattern[i..].find('}') {
                let end = i + offset + 1;
                if parse_placeholder(&pattern[i + 1..end - 1]).is_some() {
                    spans.push(i..end);
                    i = end;
                    continue;
                }
            }
        }
        i += 1;
    }

    spans
}

/// Word characters allowed in a parameter name.
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Classifies the text between one `{` / `}` pair.
///
/// Returns `None` when the content does not fit the grammar (the span then
/// stays literal).
fn parse_placeholder(body: &str) -> Option<RouteParameter> {
    let (catch_all, rest) = match body.strip_prefix('*') {
        Some(stripped) => (true, stripped),
        None => (false, body),
    };

    let name_len = rest.find(|c| !is_word(c)).unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let (name, mut tail) = rest.split_at(name_len);

    let mut optional = false;
    if let Some(stripped) = tail.strip_prefix('?') {
        optional = true;
        tail = stripped;
    }

    let constraint = match tail.strip_prefix(':') {
        Some(text) => {
            // `{id:int?}` marks the parameter optional, same as `{id?}`.
            let (text, trailing_optional) = match text.strip_suffix('?') {
                Some(inner) if !inner.is_empty() => (inner, true),
                _ => (text, false),
            };
            if text.is_empty() {
                return None;
            }
            optional = optional || trailing_optional;
            Some(text.to_string())
        }
        None if tail.is_empty() => None,
        // Leftover characters outside the grammar: not a placeholder.
        None => return None,
    };

    Some(RouteParameter::new(
        name.to_string(),
        optional,
        catch_all,
        constraint,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("{id}", "id", false, false, None)]
    #[case("{id?}", "id", true, false, None)]
    #[case("{*slug}", "slug", false, true, None)]
    #[case("{id:int}", "id", false, false, Some("int"))]
    #[case("{id:int?}", "id", true, false, Some("int"))]
    #[case("{id?:int}", "id", true, false, Some("int"))]
    #[case("{*rest:regex(.*)}", "rest", false, true, Some("regex(.*)"))]
    fn placeholder_grammar(
        #[case] span: &str,
        #[case] name: &str,
        #[case] optional: bool,
        #[case] catch_all: bool,
        #[case] constraint: Option<&str>,
    ) {
        let template = parse(span);
        assert_eq!(template.parameter_count(), 1, "span {span:?}");
        let param = &template.parameters()[0];
        assert_eq!(param.name(), name);
        assert_eq!(param.is_optional(), optional);
        assert_eq!(param.is_catch_all(), catch_all);
        assert_eq!(param.constraint(), constraint);
    }

    #[rstest]
    #[case("{}")]
    #[case("{?}")]
    #[case("{*}")]
    #[case("{id")]
    #[case("{id:}")]
    #[case("{id!}")]
    #[case("{id} extra {")]
    fn malformed_spans_are_literal(#[case] pattern: &str) {
        let template = parse(pattern);
        // `{id} extra {` still yields the valid leading placeholder.
        let valid: usize = if pattern.starts_with("{id}") { 1 } else { 0 };
        assert_eq!(template.parameter_count(), valid, "pattern {pattern:?}");
    }

    #[test]
    fn parameters_keep_pattern_order() {
        let template = parse("/a/{first}/b/{second?}/{*rest}");
        let names: Vec<&str> = template.parameters().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["first", "second", "rest"]);
    }

    #[test]
    fn spans_line_up_with_parameters() {
        let pattern = "/users/{id}/files/{*path}";
        let spans = placeholder_spans(pattern);
        let template = parse(pattern);
        assert_eq!(spans.len(), template.parameter_count());
        assert_eq!(&pattern[spans[0].clone()], "{id}");
        assert_eq!(&pattern[spans[1].clone()], "{*path}");
    }

    #[test]
    fn parse_many_preserves_order() {
        let templates = parse_many(["/a", "/b/{x}"]);
        assert_eq!(templates[0].pattern(), "/a");
        assert_eq!(templates[1].pattern(), "/b/{x}");
    }
}
