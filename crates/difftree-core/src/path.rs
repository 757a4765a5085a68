// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Path utilities over delimiter-segmented path strings.
//!
//! A path is one or more non-empty segments joined by a delimiter (`.` unless
//! configured otherwise): `Patient.name.given`. A single-segment path is a
//! *root*. Every operation here is pure; the delimiter travels in a
//! [`PathSpec`] value instead of a global so callers can normalize `/`-style
//! trees with the same code.

use thiserror::Error;

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// Errors produced when a path violates the segment contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Path string was empty.
    #[error("empty path")]
    Empty,
    /// Path has a leading, trailing, or doubled delimiter.
    #[error("empty segment in path `{path}`")]
    EmptySegment {
        /// Offending path.
        path: String,
    },
    /// Parent extraction was attempted on a root path.
    #[error("root path `{path}` has no parent")]
    NoParent {
        /// Offending path.
        path: String,
    },
    /// Delimiter cannot separate segments (whitespace or control character).
    #[error("invalid path delimiter {0:?}")]
    InvalidDelimiter(char),
}

/// Delimiter-aware path operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSpec {
    delimiter: char,
}

impl Default for PathSpec {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl PathSpec {
    /// Creates a spec splitting on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidDelimiter`] for whitespace and control
    /// characters.
    pub fn new(delimiter: char) -> Result<Self, PathError> {
        if delimiter.is_whitespace() || delimiter.is_control() {
            return Err(PathError::InvalidDelimiter(delimiter));
        }
        Ok(Self { delimiter })
    }

    /// The segment delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Checks that `path` is non-empty and has no empty segments.
    ///
    /// # Errors
    ///
    /// [`PathError::Empty`] or [`PathError::EmptySegment`].
    pub fn validate(&self, path: &str) -> Result<(), PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        if path.split(self.delimiter).any(str::is_empty) {
            return Err(PathError::EmptySegment {
                path: path.to_owned(),
            });
        }
        Ok(())
    }

    /// Whether `path` consists of a single segment.
    pub fn is_root(&self, path: &str) -> bool {
        !path.contains(self.delimiter)
    }

    /// Iterates the segments of `path`, root first.
    pub fn segments<'a>(&self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        path.split(self.delimiter)
    }

    /// Number of segments in `path`. Roots have depth 1.
    pub fn depth(&self, path: &str) -> usize {
        path.matches(self.delimiter).count() + 1
    }

    /// Final segment of `path`.
    pub fn last_segment<'a>(&self, path: &'a str) -> &'a str {
        match path.rfind(self.delimiter) {
            Some(idx) => &path[idx + self.delimiter.len_utf8()..],
            None => path,
        }
    }

    /// `path` with its last segment removed.
    ///
    /// `Patient.name.given` -> `Patient.name`
    ///
    /// # Errors
    ///
    /// [`PathError::NoParent`] when `path` is a root.
    pub fn parent_path<'a>(&self, path: &'a str) -> Result<&'a str, PathError> {
        match path.rfind(self.delimiter) {
            Some(idx) => Ok(&path[..idx]),
            None => Err(PathError::NoParent {
                path: path.to_owned(),
            }),
        }
    }

    /// True iff `a` and `b` are both non-root, share a parent, and differ in
    /// their final segment.
    pub fn is_sibling(&self, a: &str, b: &str) -> bool {
        match (self.parent_path(a), self.parent_path(b)) {
            (Ok(pa), Ok(pb)) => pa == pb && a != b,
            _ => false,
        }
    }

    /// True iff `candidate`'s parent is exactly `parent`. Roots are nobody's child.
    pub fn is_direct_child(&self, parent: &str, candidate: &str) -> bool {
        self.parent_path(candidate)
            .is_ok_and(|candidate_parent| candidate_parent == parent)
    }

    /// True iff `path` lies strictly below `ancestor` (`ancestor` followed by the
    /// delimiter is a prefix of `path`).
    pub fn is_within(&self, ancestor: &str, path: &str) -> bool {
        path.strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with(self.delimiter))
    }

    /// Proper ancestors of `path`, nearest first.
    ///
    /// `a.b.c` -> `["a.b", "a"]`
    pub fn ancestors<'a>(&self, path: &'a str) -> Vec<&'a str> {
        let mut out = Vec::with_capacity(self.depth(path).saturating_sub(1));
        let mut current = path;
        while let Ok(parent) = self.parent_path(current) {
            out.push(parent);
            current = parent;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn dot() -> PathSpec {
        PathSpec::default()
    }

    #[test]
    fn parent_path_strips_last_segment() {
        assert_eq!(dot().parent_path("Patient.name.given"), Ok("Patient.name"));
        assert_eq!(dot().parent_path("Patient.name"), Ok("Patient"));
    }

    #[test]
    fn parent_path_of_root_fails() {
        assert_eq!(
            dot().parent_path("Patient"),
            Err(PathError::NoParent {
                path: "Patient".into()
            })
        );
    }

    #[test]
    fn siblings_share_parent_and_differ() {
        let spec = dot();
        assert!(spec.is_sibling("Patient.name", "Patient.address"));
        assert!(!spec.is_sibling("Patient.name", "Patient.name"));
        assert!(!spec.is_sibling("Patient.name.given", "Patient.address"));
        // roots are never siblings
        assert!(!spec.is_sibling("Patient", "Observation"));
        assert!(!spec.is_sibling("Patient", "Patient.name"));
    }

    #[test]
    fn direct_child_requires_exact_parent() {
        let spec = dot();
        assert!(spec.is_direct_child("Patient", "Patient.name"));
        assert!(!spec.is_direct_child("Patient", "Patient.name.given"));
        assert!(!spec.is_direct_child("Patient", "Patient"));
        assert!(!spec.is_direct_child("Pat", "Patient.name"));
    }

    #[test]
    fn within_respects_segment_boundaries() {
        let spec = dot();
        assert!(spec.is_within("Patient", "Patient.name.given"));
        assert!(spec.is_within("Patient.name", "Patient.name.given"));
        assert!(!spec.is_within("Patient.na", "Patient.name.given"));
        assert!(!spec.is_within("Patient", "Patient"));
    }

    #[test]
    fn validate_rejects_empty_segments() {
        let spec = dot();
        assert_eq!(spec.validate(""), Err(PathError::Empty));
        for bad in [".a", "a.", "a..b"] {
            assert!(
                matches!(spec.validate(bad), Err(PathError::EmptySegment { .. })),
                "{bad} should be rejected"
            );
        }
        assert!(spec.validate("a.b.c").is_ok());
    }

    #[test]
    fn custom_delimiter() {
        let slash = PathSpec::new('/').unwrap();
        assert_eq!(slash.parent_path("sim/inbox/event"), Ok("sim/inbox"));
        assert!(slash.is_root("sim.inbox"));
        assert_eq!(slash.depth("sim/inbox/event"), 3);
        assert_eq!(slash.last_segment("sim/inbox/event"), "event");
        assert_eq!(slash.ancestors("sim/inbox/event"), vec!["sim/inbox", "sim"]);
    }

    #[test]
    fn whitespace_delimiter_is_rejected() {
        assert_eq!(PathSpec::new(' '), Err(PathError::InvalidDelimiter(' ')));
        assert_eq!(PathSpec::new('\n'), Err(PathError::InvalidDelimiter('\n')));
    }

    #[test]
    fn multibyte_delimiter_slices_cleanly() {
        let arrow = PathSpec::new('→').unwrap();
        assert_eq!(arrow.parent_path("a→b→c"), Ok("a→b"));
        assert_eq!(arrow.last_segment("a→b→c"), "c");
        assert!(arrow.is_within("a", "a→b"));
    }
}
