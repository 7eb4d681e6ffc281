//! Best-template selection
//!
//! Given all templates registered for one navigation target and the
//! caller-supplied raw parameter string, picks the single template that
//! fits best. Pure function of its inputs: no hidden state, identical
//! inputs always yield the identical choice.

use std::cmp::Reverse;

use crate::{RouteTemplate, RouteTemplateCollection};

/// Picks the best-fitting template for a raw parameter string.
///
/// Algorithm, in order:
/// 1. No parameters, or a query-string-only parameter (`?...`) → the
///    primary template.
/// 2. Count the provided path segments (the part before the first `?`,
///    split on `/`, empty segments ignored).
/// 3. Candidates are templates that can accommodate that count: catch-all
///    templates always can; otherwise the count must fall between the
///    required and total parameter counts.
/// 4. Rank candidates: more parameters first (most specific), then fewer
///    optional parameters, catch-all last. Ties go to the
///    earlier-registered template, so the result is deterministic.
/// 5. No candidate accommodates the count → fall back to the primary
///    template (extra path values are discarded downstream).
///
/// # Examples
///
/// ```
/// use veld_router::{parse_many, select_best_template, RouteTemplateCollection};
///
/// let collection =
///     RouteTemplateCollection::new(parse_many(["/test", "/test/{echo}"])).unwrap();
///
/// assert_eq!(select_best_template(&collection, None).pattern(), "/test");
/// assert_eq!(select_best_template(&collection, Some("")).pattern(), "/test");
/// assert_eq!(select_best_template(&collection, Some("?a=1")).pattern(), "/test");
/// assert_eq!(
///     select_best_template(&collection, Some("hello")).pattern(),
///     "/test/{echo}",
/// );
/// ```
pub fn select_best_template<'a>(
    collection: &'a RouteTemplateCollection,
    parameters: Option<&str>,
) -> &'a RouteTemplate {
    let raw = match parameters {
        Some(raw) if !raw.is_empty() && !raw.starts_with('?') => raw,
        _ => return collection.primary_template(),
    };

    let path_part = match raw.find('?') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let provided = path_part.split('/').filter(|s| !s.is_empty()).count();

    collection
        .templates()
        .iter()
        .filter(|t| accommodates(t, provided))
        .min_by_key(|t| {
            (
                Reverse(t.parameter_count()),
                t.optional_parameter_count(),
                t.has_catch_all(),
            )
        })
        .unwrap_or_else(|| collection.primary_template())
}

/// Whether a template can absorb `provided` path segments.
fn accommodates(template: &RouteTemplate, provided: usize) -> bool {
    template.has_catch_all()
        || (template.required_parameter_count() <= provided
            && provided <= template.parameter_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_many;

    fn collection(patterns: &[&str]) -> RouteTemplateCollection {
        RouteTemplateCollection::new(parse_many(patterns.iter().copied())).unwrap()
    }

    #[test]
    fn query_only_parameters_use_primary() {
        let c = collection(&["/items", "/items/{id}"]);
        assert_eq!(
            select_best_template(&c, Some("?sort=desc")).pattern(),
            "/items"
        );
    }

    #[test]
    fn segment_count_picks_matching_arity() {
        let c = collection(&["/items", "/items/{id}", "/items/{id}/{tab}"]);
        assert_eq!(select_best_template(&c, Some("7")).pattern(), "/items/{id}");
        assert_eq!(
            select_best_template(&c, Some("7/reviews")).pattern(),
            "/items/{id}/{tab}"
        );
    }

    #[test]
    fn required_match_beats_optional_match() {
        // Both accommodate one segment; the all-required template is ranked
        // above the optional one.
        let c = collection(&["/a/{id?}", "/b/{id}"]);
        assert_eq!(select_best_template(&c, Some("42")).pattern(), "/b/{id}");
    }

    #[test]
    fn catch_all_is_a_fallback_shape() {
        let c = collection(&["/docs/{page}", "/docs/{*slug}"]);
        // One segment: the specific single-parameter template wins even
        // though the catch-all also accommodates it.
        assert_eq!(
            select_best_template(&c, Some("intro")).pattern(),
            "/docs/{page}"
        );
        // Three segments: only the catch-all fits.
        assert_eq!(
            select_best_template(&c, Some("a/b/c")).pattern(),
            "/docs/{*slug}"
        );
    }

    #[test]
    fn unaccommodated_count_falls_back_to_primary() {
        let c = collection(&["/one/{a}", "/two/{a}/{b}"]);
        assert_eq!(
            select_best_template(&c, Some("1/2/3/4")).pattern(),
            "/one/{a}"
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let c = collection(&["/x/{a}", "/y/{b}"]);
        let first = select_best_template(&c, Some("v")).pattern().to_string();
        for _ in 0..100 {
            assert_eq!(select_best_template(&c, Some("v")).pattern(), first);
        }
    }

    #[test]
    fn empty_segments_are_ignored_when_counting() {
        let c = collection(&["/items", "/items/{id}"]);
        assert_eq!(
            select_best_template(&c, Some("//7//")).pattern(),
            "/items/{id}"
        );
    }
}
