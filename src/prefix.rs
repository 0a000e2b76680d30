//! Longest common ancestor computation for slash-delimited paths.

/// Returns the longest common ancestor path of `a` and `b`.
///
/// The result is a slash-segment-aligned prefix of both inputs: a naive
/// character comparison would treat `/aa` and `/ab` as sharing the prefix
/// `/a`, which is not a valid path. The result is always either empty or a
/// path ending exactly at a segment boundary.
///
/// Returns the empty string if either input is empty or the inputs share no
/// non-empty ancestor.
///
/// # Examples
///
/// ```
/// use pathnest::common_ancestor;
///
/// assert_eq!(common_ancestor("/aa/bb", "/aa/b"), "/aa/");
/// assert_eq!(common_ancestor("/foo/bar", "/foo/bar/baz"), "/foo/bar");
/// assert_eq!(common_ancestor("/foo", "/bar"), "");
/// ```
pub fn common_ancestor<'a>(a: &'a str, b: &str) -> &'a str {
    if a == b {
        return a;
    }
    if a.is_empty() || b.is_empty() {
        return "";
    }

    // One input is a strict directory ancestor of the other, e.g. /abc/de
    // against /abc/de/ or /abc/de/foo.
    if let Some(rest) = a.strip_prefix(b) {
        if rest.starts_with('/') {
            return &a[..b.len()];
        }
    }
    if let Some(rest) = b.strip_prefix(a) {
        if rest.starts_with('/') {
            return a;
        }
    }

    let limit = a.len().min(b.len());
    let bytes_a = a.as_bytes();
    let bytes_b = b.as_bytes();
    let mut last_slash = None;
    for i in 0..limit {
        if bytes_a[i] != bytes_b[i] {
            return match last_slash {
                Some(pos) => &a[..pos],
                None => "",
            };
        }
        if bytes_a[i] == b'/' {
            last_slash = Some(i);
        }
    }

    match last_slash {
        // The shorter input ran out right after a segment boundary.
        Some(pos) => &a[..=pos],
        // No separator in the agreeing region; non-path input. Best effort,
        // keep the cut on a character boundary.
        None => a.chars().next().map_or("", |c| &a[..c.len_utf8()]),
    }
}
