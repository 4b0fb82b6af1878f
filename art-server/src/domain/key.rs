//! Join key primitives: normalized station names and line tokens.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid line token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line token: {reason}")]
pub struct InvalidLine {
    reason: &'static str,
}

/// A subway service line identifier (e.g. `A`, `7`, `GS`).
///
/// Tokens are stored uppercase and contain only ASCII letters and digits,
/// so two lines compare equal exactly when they name the same service.
///
/// # Examples
///
/// ```
/// use art_server::domain::Line;
///
/// let a = Line::parse(" a ").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(Line::parse("").is_err());
/// assert!(Line::parse("A?").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Line(String);

impl Line {
    /// Parse a single line token, trimming and uppercasing it.
    pub fn parse(s: &str) -> Result<Self, InvalidLine> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLine {
                reason: "must not be empty",
            });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidLine {
                reason: "must be ASCII letters and digits",
            });
        }

        Ok(Line(trimmed.to_ascii_uppercase()))
    }

    /// Split a delimited list of line tokens.
    ///
    /// Commas, slashes and whitespace all separate tokens. Empty pieces are
    /// ignored; duplicates keep their first position. A single malformed
    /// token fails the whole list.
    pub fn parse_list(s: &str) -> Result<Vec<Line>, InvalidLine> {
        let mut lines: Vec<Line> = Vec::new();
        for piece in s.split(|c: char| c == ',' || c == '/' || c.is_whitespace()) {
            if piece.is_empty() {
                continue;
            }
            let line = Line::parse(piece)?;
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
        Ok(lines)
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station name normalized for matching.
///
/// Leading and trailing whitespace is removed, internal runs of whitespace
/// collapse to a single space and letters are lowercased. Display names are
/// kept separately; this type only exists to compare names.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NameKey(String);

impl NameKey {
    /// Normalize a station name. Returns `None` for blank names.
    pub fn new(name: &str) -> Option<Self> {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if normalized.is_empty() {
            None
        } else {
            Some(NameKey(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey({})", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any alphanumeric token parses to its uppercase form
        #[test]
        fn alphanumeric_always_parses(s in "[A-Za-z0-9]{1,4}") {
            let parsed = Line::parse(&s).unwrap();
            prop_assert_eq!(parsed.as_str(), s.to_ascii_uppercase());
        }

        /// Joining tokens with any delimiter and splitting gives them back
        #[test]
        fn list_roundtrip(tokens in proptest::collection::vec("[A-Z0-9]{1,3}", 1..6), sep in "[,/ ]") {
            let joined = tokens.join(&sep);
            let parsed: Vec<String> = Line::parse_list(&joined)
                .unwrap()
                .into_iter()
                .map(|l| l.as_str().to_string())
                .collect();
            let mut expected: Vec<String> = Vec::new();
            for t in tokens {
                if !expected.contains(&t) {
                    expected.push(t);
                }
            }
            prop_assert_eq!(parsed, expected);
        }

        /// Name normalization is idempotent
        #[test]
        fn name_key_idempotent(s in "[ A-Za-z0-9-]{1,30}") {
            if let Some(key) = NameKey::new(&s) {
                let again = NameKey::new(key.as_str()).unwrap();
                prop_assert_eq!(again, key);
            }
        }
    }
}
