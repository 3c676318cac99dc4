use crate::String;

/// The segment of `right` that tells it apart from `left`.
///
/// Both names are split on `.` and compared from the last segment
/// backwards. Trailing empty segments are dropped before comparing, so
/// `"a.Foo."` has the segments `a` and `Foo`. The first `right` segment
/// that differs is returned. When one name runs out first, or the names are
/// equal, the result is `"other"`.
///
/// ```
/// use codemodel_types::query::fully_qualified_name_diff;
///
/// assert_eq!(fully_qualified_name_diff("a.b.Foo", "a.c.Foo"), "c");
/// assert_eq!(fully_qualified_name_diff("a.b.Foo", "a.b.Foo"), "other");
/// ```
pub fn fully_qualified_name_diff<'a>(left: &str, right: &'a str) -> &'a str {
    segments_from_end(left)
        .zip(segments_from_end(right))
        .find(|(l, r)| l != r)
        .map_or("other", |(_, r)| r)
}

/// Dotted segments, last first, without trailing empty ones.
///
/// A name made only of dots has no segments; the empty name has one.
fn segments_from_end(name: &str) -> impl Iterator<Item = &str> {
    let trimmed = name.trim_end_matches('.');
    let count = if trimmed.is_empty() && !name.is_empty() {
        0
    } else {
        usize::MAX
    };
    trimmed.rsplit('.').take(count)
}

/// `name` with its first character upper-cased.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
