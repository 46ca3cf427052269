//! Ordered route table and its resolver.
//!
//! A table is declared once from a literal list of entries and never changes
//! afterwards. Resolution scans the entries in declaration order and the first
//! pattern that matches wins, so overlapping patterns are allowed and their
//! order is significant.

use tracing::warn;

use crate::path_matches::{Segment, match_pattern, normalize_path, segments};
use crate::{RouteError, RouteParams};

/// One `(pattern, page)` pair of a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<P> {
    pattern: String,
    page: P,
}

impl<P> RouteEntry<P> {
    /// Creates an entry mapping `pattern` to `page`.
    pub fn new(pattern: impl Into<String>, page: P) -> Self {
        Self {
            pattern: pattern.into(),
            page,
        }
    }

    /// The path pattern, as declared.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The page rendered for this pattern.
    pub fn page(&self) -> &P {
        &self.page
    }
}

/// Shorthand for [`RouteEntry::new`], reads well inside table literals.
///
/// ```
/// use pianino_router::{RouteTable, route};
///
/// let table = RouteTable::new([route("/", "home"), route("/register", "register")]);
/// assert_eq!(table.resolve("/register"), Some(&"register"));
/// ```
pub fn route<P>(pattern: impl Into<String>, page: P) -> RouteEntry<P> {
    RouteEntry::new(pattern, page)
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, P> {
    /// Page selected for the path.
    pub page: &'a P,
    /// Pattern that matched, `None` when the fallback page was used.
    pub pattern: Option<&'a str>,
    /// Parameters captured by the pattern.
    pub params: RouteParams,
    /// The requested path after normalisation.
    pub path: String,
}

impl<P> RouteMatch<'_, P> {
    /// Whether this match came from the fallback page rather than an entry.
    pub fn is_fallback(&self) -> bool {
        self.pattern.is_none()
    }
}

/// Immutable, ordered collection of route entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
    fallback: Option<P>,
}

impl<P> RouteTable<P> {
    /// Stores the entries in the given order. Nothing is validated here; see
    /// [`RouteTable::validate`].
    pub fn new(entries: impl IntoIterator<Item = RouteEntry<P>>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback: None,
        }
    }

    /// Sets the page used for paths no entry matches.
    pub fn with_fallback(mut self, page: P) -> Self {
        self.fallback = Some(page);
        self
    }

    /// Returns the page of the first entry matching `path`, or the fallback.
    pub fn resolve(&self, path: &str) -> Option<&P> {
        self.resolve_match(path).map(|route_match| route_match.page)
    }

    /// Like [`RouteTable::resolve`] but also reports the matched pattern and
    /// the captured parameters.
    pub fn resolve_match(&self, path: &str) -> Option<RouteMatch<'_, P>> {
        let path = normalize_path(path);

        for entry in &self.entries {
            if let Some(params) = match_pattern(&entry.pattern, &path) {
                return Some(RouteMatch {
                    page: &entry.page,
                    pattern: Some(&entry.pattern),
                    params,
                    path,
                });
            }
        }

        let fallback = self.fallback.as_ref()?;
        warn!(%path, "no route matched, using fallback page");

        Some(RouteMatch {
            page: fallback,
            pattern: None,
            params: RouteParams::default(),
            path,
        })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry<P>] {
        &self.entries
    }

    /// Declared patterns in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(RouteEntry::pattern)
    }

    /// The fallback page, if any.
    pub fn fallback(&self) -> Option<&P> {
        self.fallback.as_ref()
    }

    /// Number of entries, not counting the fallback.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every pattern for malformed placeholders and for collisions
    /// with earlier patterns.
    ///
    /// Patterns are compared the way they match: trailing slashes are ignored
    /// and literal segments are case-insensitive, so `/Register/` collides
    /// with `/register`. An entry is also rejected when an earlier pattern
    /// matches every path it does, since resolution would never reach it:
    /// `/tasks/new` after `/tasks/{id}` is a conflict, before it is not.
    pub fn validate(&self) -> Result<(), RouteError> {
        let mut router = matchit::Router::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let canonical = canonical_pattern(&entry.pattern)?;

            if let Some(earlier) = self.entries[..index]
                .iter()
                .find(|earlier| shadows(&earlier.pattern, &entry.pattern))
            {
                return Err(RouteError::Conflict {
                    pattern: entry.pattern.clone(),
                    existing: earlier.pattern.clone(),
                });
            }

            if let Err(e) = router.insert(canonical, entry.pattern.as_str()) {
                return Err(match e {
                    matchit::InsertError::Conflict { with } => RouteError::Conflict {
                        pattern: entry.pattern.clone(),
                        existing: declared_pattern(&router, &with).unwrap_or(with),
                    },
                    other => RouteError::InvalidPattern {
                        pattern: entry.pattern.clone(),
                        reason: other.to_string(),
                    },
                });
            }
        }

        Ok(())
    }
}

// Rewrites a pattern into the form used for conflict detection: literal
// segments lowercased, empty segments dropped.
fn canonical_pattern(pattern: &str) -> Result<String, RouteError> {
    let invalid = |reason: &str| RouteError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: reason.to_owned(),
    };

    let raw: Vec<&str> = segments(pattern).collect();
    let mut canonical = Vec::with_capacity(raw.len());

    for (index, part) in raw.iter().enumerate() {
        match Segment::parse(part) {
            Segment::Literal(literal) => {
                if literal.contains(['{', '}']) {
                    return Err(invalid("unbalanced braces"));
                }
                canonical.push(literal.to_ascii_lowercase());
            }
            Segment::Param(name) | Segment::CatchAll(name) if name.is_empty() => {
                return Err(invalid("placeholder without a name"));
            }
            Segment::Param(name) | Segment::CatchAll(name)
                if name.contains(['{', '}', '*']) =>
            {
                return Err(invalid("placeholder name contains reserved characters"));
            }
            Segment::CatchAll(_) if index + 1 != raw.len() => {
                return Err(invalid("catch-all must be the last segment"));
            }
            Segment::Param(_) | Segment::CatchAll(_) => canonical.push((*part).to_owned()),
        }
    }

    Ok(format!("/{}", canonical.join("/")))
}

// Whether every path matched by `later` is also matched by `earlier`.
// Both patterns must already have passed `canonical_pattern`.
fn shadows(earlier: &str, later: &str) -> bool {
    let mut earlier = segments(earlier).map(Segment::parse);
    let mut later = segments(later).map(Segment::parse).peekable();

    loop {
        match (earlier.next(), later.peek()) {
            (None, None) => return true,
            (Some(Segment::CatchAll(_)), next) => return next.is_some(),
            (None, Some(_)) | (Some(_), None) => return false,
            (Some(Segment::Param(_)), Some(Segment::Literal(_) | Segment::Param(_))) => {}
            (Some(Segment::Literal(a)), Some(Segment::Literal(b)))
                if a.eq_ignore_ascii_case(b) => {}
            (Some(_), Some(_)) => return false,
        }

        later.next();
    }
}

// matchit reports conflicts using the canonical form; map back to what the
// table declared when the colliding route is a plain lookup away.
fn declared_pattern(router: &matchit::Router<&str>, canonical: &str) -> Option<String> {
    router.at(canonical).ok().map(|m| (*m.value).to_owned())
}
