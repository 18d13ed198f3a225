//! Core types used throughout the project.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Line reference of a `<location>` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRef {
    /// `line="201"`
    Absolute(u32),
    /// `line="+3"`, relative to the previous record of the same file.
    Relative(i32),
}

impl LineRef {
    /// Parses a `line` attribute value. Returns `None` for anything that is not a number.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('+') || value.starts_with('-') {
            return value.parse::<i32>().ok().map(Self::Relative);
        }
        value.parse::<u32>().ok().map(Self::Absolute)
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(line) => write!(f, "{line}"),
            Self::Relative(delta) => write!(f, "{delta:+}"),
        }
    }
}

/// Provenance record of a message: the file and line the string was extracted from.
///
/// Used by translator tooling only; lookups never look at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub filename: String,
    pub line: Option<LineRef>,
}

impl SourceLocation {
    #[must_use]
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self { filename: filename.into(), line: Some(LineRef::Absolute(line)) }
    }
}

/// A location with its line resolved to an absolute number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedLocation {
    pub filename: String,
    pub line: Option<u32>,
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.filename),
            None => f.write_str(&self.filename),
        }
    }
}

/// Resolves relative line references.
///
/// Records must be fed in catalog order: a relative line is an offset from the last
/// line seen for the same file.
#[derive(Debug, Default)]
pub struct LineResolver {
    last_lines: HashMap<String, u32>,
}

impl LineResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, location: &SourceLocation) -> ResolvedLocation {
        let line = match location.line {
            Some(LineRef::Absolute(line)) => Some(line),
            Some(LineRef::Relative(delta)) => {
                let base = self.last_lines.get(&location.filename).copied().unwrap_or(0);
                base.checked_add_signed(delta)
            }
            None => None,
        };
        if let Some(line) = line {
            self.last_lines.insert(location.filename.clone(), line);
        }
        ResolvedLocation { filename: location.filename.clone(), line }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::absolute("201", Some(LineRef::Absolute(201)))]
    #[case::relative_plus("+3", Some(LineRef::Relative(3)))]
    #[case::relative_minus("-12", Some(LineRef::Relative(-12)))]
    #[case::padded(" 7 ", Some(LineRef::Absolute(7)))]
    #[case::empty("", None)]
    #[case::garbage("abc", None)]
    fn test_line_ref_parse(#[case] value: &str, #[case] expected: Option<LineRef>) {
        assert_that!(LineRef::parse(value), eq(expected));
    }

    #[rstest]
    #[case::absolute(LineRef::Absolute(14), "14")]
    #[case::relative_plus(LineRef::Relative(3), "+3")]
    #[case::relative_minus(LineRef::Relative(-2), "-2")]
    fn test_line_ref_display(#[case] line: LineRef, #[case] expected: &str) {
        assert_that!(line.to_string(), eq(expected));
    }

    #[googletest::test]
    fn test_resolver_tracks_each_file_separately() {
        let mut resolver = LineResolver::new();
        let doc = |line| SourceLocation { filename: "document.cpp".to_string(), line: Some(line) };
        let win = |line| SourceLocation { filename: "window.cpp".to_string(), line: Some(line) };

        expect_that!(resolver.resolve(&doc(LineRef::Absolute(201))).line, some(eq(201)));
        expect_that!(resolver.resolve(&win(LineRef::Relative(10))).line, some(eq(10)));
        expect_that!(resolver.resolve(&doc(LineRef::Relative(2))).line, some(eq(203)));
        expect_that!(resolver.resolve(&win(LineRef::Relative(-4))).line, some(eq(6)));
    }

    #[googletest::test]
    fn test_resolver_rejects_negative_lines() {
        let mut resolver = LineResolver::new();
        let location =
            SourceLocation { filename: "a.cpp".to_string(), line: Some(LineRef::Relative(-1)) };

        expect_that!(resolver.resolve(&location).line, none());
    }

    #[googletest::test]
    fn test_resolved_location_display() {
        let with_line = ResolvedLocation { filename: "../src/document.cpp".into(), line: Some(201) };
        let without = ResolvedLocation { filename: "../src/document.cpp".into(), line: None };

        expect_that!(with_line.to_string(), eq("../src/document.cpp:201"));
        expect_that!(without.to_string(), eq("../src/document.cpp"));
    }
}
