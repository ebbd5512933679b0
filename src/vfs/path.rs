//! Locations and path resolution
//!
//! Resolution is purely syntactic: it never looks at the tree, so a resolved
//! location may point at nothing. The accessor decides that later.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute position in the tree as segments from the root. Empty is root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location(Vec<String>);

impl Location {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Top-level directory this location sits in, if any
    pub fn section(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Drop the last segment; a no-op at the root
    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut joined = self.clone();
        joined.push(segment);
        joined
    }

    /// Resolve `expression` against this location
    pub fn resolve(&self, expression: &str) -> Self {
        resolve(self, expression)
    }
}

impl<S: Into<String>> FromIterator<S> for Location {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// `~` for root, `/a/b` otherwise
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "~");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Render a location for display
pub fn path_to_string(location: &Location) -> String {
    location.to_string()
}

/// Resolve a slash-separated expression against `base`.
///
/// - empty segments are skipped, so `a//b/` equals `a/b`
/// - `..` pops one segment and stops at the root
/// - `~` jumps back to the root and keeps going
/// - `.` does nothing
/// - anything else is appended as-is
pub fn resolve(base: &Location, expression: &str) -> Location {
    let mut working = base.clone();
    for segment in expression.split('/').filter(|s| !s.is_empty()) {
        match segment {
            ".." => working.pop(),
            "~" => working = Location::root(),
            "." => {}
            name => working.push(name),
        }
    }
    working
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(segments: &[&str]) -> Location {
        segments.iter().copied().collect()
    }

    #[test]
    fn test_empty_expression_returns_base() {
        let base = loc(&["projects"]);
        assert_eq!(resolve(&base, ""), base);
        assert_eq!(resolve(&base, "///"), base);
    }

    #[test]
    fn test_parent_at_root_is_noop() {
        assert_eq!(resolve(&Location::root(), ".."), Location::root());
        assert_eq!(resolve(&Location::root(), "../../.."), Location::root());
    }

    #[test]
    fn test_home_resets() {
        let base = loc(&["projects", "x"]);
        assert_eq!(resolve(&base, "~/skills"), loc(&["skills"]));
        assert_eq!(resolve(&base, "a/~"), Location::root());
    }

    #[test]
    fn test_dot_and_repeated_slashes() {
        let base = loc(&["a"]);
        assert_eq!(resolve(&base, "./b//./c/"), loc(&["a", "b", "c"]));
        assert_eq!(resolve(&base, "/b"), loc(&["a", "b"]));
    }

    #[test]
    fn test_no_existence_check() {
        assert_eq!(
            resolve(&Location::root(), "does/not/exist"),
            loc(&["does", "not", "exist"])
        );
    }

    #[test]
    fn test_down_then_up_returns_to_start() {
        for base in [Location::root(), loc(&["projects"]), loc(&["a", "b", "c"])] {
            for (a, b) in [("a", "b"), ("x", "x"), ("projects", "missing")] {
                let down = resolve(&base, &format!("{}/{}", a, b));
                assert_eq!(resolve(&down, "../.."), base);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(path_to_string(&Location::root()), "~");
        assert_eq!(path_to_string(&loc(&["projects"])), "/projects");
        assert_eq!(loc(&["a", "b"]).to_string(), "/a/b");
    }

    #[test]
    fn test_display_round_trips_through_resolve() {
        for location in [Location::root(), loc(&["skills"]), loc(&["projects", "x", "y"])] {
            let rendered = path_to_string(&location);
            let expression = rendered.strip_prefix('/').unwrap_or(&rendered);
            assert_eq!(resolve(&Location::root(), expression), location);
        }
    }

    #[test]
    fn test_section() {
        assert_eq!(Location::root().section(), None);
        assert_eq!(loc(&["contact", "email"]).section(), Some("contact"));
    }
}
