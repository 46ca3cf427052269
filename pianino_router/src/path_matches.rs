// Segment-wise matching of a route pattern against a requested path.
//
// Patterns are split on '/' and compared against the normalised path segment
// by segment:
// - a literal segment matches the path segment ignoring ASCII case
// - `{name}` matches exactly one segment and captures it
// - `{*name}` matches every remaining segment (at least one) and captures them
//   joined with '/'; anywhere but last it matches nothing
//
// Empty segments are ignored on both sides, so "/register/" and "/register"
// are the same route and "//" collapses to "/".

use crate::RouteParams;

/// A parsed pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
    CatchAll(&'a str),
}

impl<'a> Segment<'a> {
    pub(crate) fn parse(raw: &'a str) -> Self {
        if let Some(name) = raw.strip_prefix("{*").and_then(|s| s.strip_suffix('}')) {
            Segment::CatchAll(name)
        } else if let Some(name) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Segment::Param(name)
        } else {
            Segment::Literal(raw)
        }
    }
}

pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Normalises a requested path: drops the query string and fragment,
/// collapses empty segments and removes any trailing slash.
///
/// ```
/// use pianino_router::normalize_path;
///
/// assert_eq!(normalize_path("/register/?next=%2F#top"), "/register");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let joined = segments(&path[..end]).collect::<Vec<_>>().join("/");

    format!("/{joined}")
}

/// Matches `pattern` against an already normalised `path`.
///
/// Returns the captured parameters on success.
pub(crate) fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let path_segments: Vec<&str> = segments(path).collect();
    let mut params = RouteParams::default();
    let mut consumed = 0;
    let mut pattern_segments = segments(pattern).peekable();

    while let Some(raw) = pattern_segments.next() {
        match Segment::parse(raw) {
            Segment::CatchAll(name) => {
                // only valid as the final segment
                if pattern_segments.peek().is_some() {
                    return None;
                }

                let rest = path_segments.get(consumed..).unwrap_or_default();
                if rest.is_empty() {
                    return None;
                }

                params.push(name, rest.join("/"));
                return Some(params);
            }
            Segment::Param(name) => {
                let value = path_segments.get(consumed)?;
                params.push(name, *value);
            }
            Segment::Literal(literal) => {
                let value = path_segments.get(consumed)?;
                if !literal.eq_ignore_ascii_case(value) {
                    return None;
                }
            }
        }

        consumed += 1;
    }

    (consumed == path_segments.len()).then_some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/register/"), "/register");
        assert_eq!(normalize_path("//login//"), "/login");
        assert_eq!(normalize_path("/dashboard?tab=tasks"), "/dashboard");
        assert_eq!(normalize_path("/dashboard#tasks"), "/dashboard");
        assert_eq!(normalize_path("?only=query"), "/");
        assert_eq!(normalize_path("tasks/12"), "/tasks/12");
    }

    #[test]
    fn test_match_literal_patterns() {
        assert!(match_pattern("/", "/").is_some());
        assert!(match_pattern("/register", "/register").is_some());
        assert!(match_pattern("/register/", "/register").is_some());
        assert!(match_pattern("/register", "/Register").is_some());

        assert!(match_pattern("/", "/register").is_none());
        assert!(match_pattern("/register", "/").is_none());
        assert!(match_pattern("/register", "/register/extra").is_none());
        assert!(match_pattern("/login", "/logout").is_none());
    }

    #[test]
    fn test_match_params() {
        let params = match_pattern("/tasks/{id}", "/tasks/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.len(), 1);

        let params = match_pattern("/{org}/{repo}/tree", "/rust-lang/cargo/tree").unwrap();
        assert_eq!(params.get("org"), Some("rust-lang"));
        assert_eq!(params.get("repo"), Some("cargo"));

        assert!(match_pattern("/tasks/{id}", "/tasks").is_none());
        assert!(match_pattern("/tasks/{id}", "/tasks/42/toggle").is_none());
    }

    #[test]
    fn test_match_catch_all() {
        let params = match_pattern("/{*rest}", "/a/b/c").unwrap();
        assert_eq!(params.get("rest"), Some("a/b/c"));

        let params = match_pattern("/docs/{*page}", "/docs/intro").unwrap();
        assert_eq!(params.get("page"), Some("intro"));

        // catch-all needs at least one segment
        assert!(match_pattern("/docs/{*page}", "/docs").is_none());
        assert!(match_pattern("/{*rest}", "/").is_none());
    }

    #[test]
    fn test_catch_all_not_last_never_matches() {
        assert!(match_pattern("/{*rest}/edit", "/a/b").is_none());
        assert!(match_pattern("/{*rest}/edit", "/a/edit").is_none());
        assert!(match_pattern("/docs/{*page}/{id}", "/docs/intro/3").is_none());
    }

    #[test]
    fn test_segment_parse() {
        assert_eq!(Segment::parse("users"), Segment::Literal("users"));
        assert_eq!(Segment::parse("{id}"), Segment::Param("id"));
        assert_eq!(Segment::parse("{*path}"), Segment::CatchAll("path"));
        assert_eq!(Segment::parse("{id"), Segment::Literal("{id"));
    }
}
