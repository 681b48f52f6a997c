use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

/// A participant name: non-empty, with surrounding whitespace removed.
///
/// Two names are `==` only when their stored text is identical, casing
/// included. Duplicate detection in the roster uses the looser
/// [`Name::matches`], which ignores case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(NonEmptyString);

impl Name {
    /// Creates a `Name` from raw user input.
    ///
    /// The candidate is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyNameError`] if nothing is left after trimming.
    pub fn new(candidate: &str) -> Result<Self, EmptyNameError> {
        NonEmptyString::new(candidate.trim().to_string())
            .map(Self)
            .map_err(|_| EmptyNameError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The case-folded form used for duplicate detection.
    #[must_use]
    pub fn folded(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Case-insensitive comparison against another name.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl TryFrom<String> for Name {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Name {
    type Error = EmptyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Name {
    type Err = EmptyNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error returned when a candidate name is empty or only whitespace.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
#[error("name must contain at least one non-whitespace character")]
pub struct EmptyNameError;

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Ana", "Ana"; "already trimmed")]
    #[test_case("  Ana", "Ana"; "leading spaces")]
    #[test_case("Ana \t", "Ana"; "trailing whitespace")]
    #[test_case(" María José ", "María José"; "inner space kept")]
    fn new_trims_candidate(input: &str, expected: &str) {
        assert_eq!(Name::new(input).unwrap().as_str(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\t\n"; "tab and newline")]
    fn new_rejects_blank(input: &str) {
        assert_eq!(Name::new(input), Err(EmptyNameError));
    }

    #[test]
    fn equality_is_case_sensitive() {
        assert_ne!(Name::new("Ana").unwrap(), Name::new("ana").unwrap());
    }

    #[test_case("Ana", "ana"; "ascii")]
    #[test_case("ÉLODIE", "élodie"; "accented")]
    #[test_case("Beto", "BETO"; "upper")]
    fn matches_ignores_case(a: &str, b: &str) {
        assert!(Name::new(a).unwrap().matches(&Name::new(b).unwrap()));
    }

    #[test]
    fn different_names_do_not_match() {
        assert!(!Name::new("Ana").unwrap().matches(&Name::new("Anna").unwrap()));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Name::new("Caro").unwrap()).unwrap();
        assert_eq!(json, "\"Caro\"");
    }
}
