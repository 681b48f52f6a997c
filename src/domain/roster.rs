use tracing::instrument;

use super::name::{EmptyNameError, Name};

/// The ordered list of participants.
///
/// Names are kept in insertion order and no two entries are equal ignoring
/// case. The roster only grows by [`Roster::add`]; the only way to shrink it
/// is [`Roster::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<Name>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Trims `candidate` and appends it.
    ///
    /// Returns the name as stored.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if the trimmed candidate is empty
    /// - [`Error::DuplicateName`] if a name equal ignoring case is already
    ///   present
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, candidate: &str) -> Result<Name, Error> {
        let name = Name::new(candidate)?;

        if let Some(existing) = self.find(&name) {
            return Err(Error::DuplicateName {
                candidate: name,
                existing: existing.clone(),
            });
        }

        self.names.push(name.clone());
        tracing::debug!(%name, size = self.names.len(), "participant added");
        Ok(name)
    }

    /// Removes every participant.
    #[instrument(level = "debug", skip(self), fields(size = self.names.len()))]
    pub fn reset(&mut self) {
        self.names.clear();
    }

    /// Read-only view of the participants, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Name] {
        &self.names
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `candidate` (after trimming) is already present, ignoring case.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        Name::new(candidate).is_ok_and(|name| self.find(&name).is_some())
    }

    /// Iterates over the participants in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Name> {
        self.names.iter()
    }

    fn find(&self, name: &Name) -> Option<&Name> {
        let folded = name.folded();
        self.names.iter().find(|existing| existing.folded() == folded)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Name;
    type IntoIter = std::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reasons a candidate name is refused by the roster.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The candidate was empty after trimming.
    #[error("please enter a name")]
    EmptyInput,

    /// A name equal ignoring case is already in the roster.
    #[error("the name '{candidate}' has already been added (as '{existing}')")]
    DuplicateName {
        /// The rejected name, trimmed.
        candidate: Name,
        /// The entry it collides with.
        existing: Name,
    },
}

impl From<EmptyNameError> for Error {
    fn from(_: EmptyNameError) -> Self {
        Self::EmptyInput
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn roster(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster.add(name).unwrap();
        }
        roster
    }

    fn listed(roster: &Roster) -> Vec<&str> {
        roster.iter().map(Name::as_str).collect()
    }

    #[test]
    fn new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert!(roster.list().is_empty());
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let roster = roster(&["Caro", "Ana", "Beto"]);
        assert_eq!(listed(&roster), ["Caro", "Ana", "Beto"]);
    }

    #[test]
    fn add_grows_by_exactly_one() {
        let mut roster = roster(&["Ana", "Beto"]);
        let before = roster.len();

        let name = roster.add("  Caro ").unwrap();

        assert_eq!(name.as_str(), "Caro");
        assert_eq!(roster.len(), before + 1);
        assert_eq!(roster.list().last(), Some(&name));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\t"; "tab")]
    fn add_rejects_blank_input(candidate: &str) {
        let mut roster = roster(&["Ana"]);
        assert_eq!(roster.add(candidate), Err(Error::EmptyInput));
        assert_eq!(roster.len(), 1);
    }

    #[test_case("ana"; "lowercase")]
    #[test_case("ANA"; "uppercase")]
    #[test_case("  aNa  "; "mixed case with padding")]
    #[test_case("Ana"; "exact")]
    fn add_rejects_case_insensitive_duplicates(candidate: &str) {
        let mut roster = roster(&["Ana"]);

        let error = roster.add(candidate).unwrap_err();

        assert!(matches!(
            &error,
            Error::DuplicateName { existing, .. } if existing.as_str() == "Ana"
        ));
        assert_eq!(listed(&roster), ["Ana"]);
    }

    #[test]
    fn duplicate_error_mentions_both_spellings() {
        let mut roster = roster(&["Ana"]);
        let message = roster.add("ana").unwrap_err().to_string();
        assert_eq!(message, "the name 'ana' has already been added (as 'Ana')");
    }

    #[test_case(0; "already empty")]
    #[test_case(1; "single")]
    #[test_case(5; "several")]
    fn reset_always_empties(size: usize) {
        let mut roster = Roster::new();
        for i in 0..size {
            roster.add(&format!("Friend {i}")).unwrap();
        }

        roster.reset();

        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn names_can_be_reused_after_reset() {
        let mut roster = roster(&["Ana", "Beto"]);
        roster.reset();
        assert!(roster.add("ana").is_ok());
        assert_eq!(listed(&roster), ["ana"]);
    }

    #[test]
    fn contains_ignores_case_and_padding() {
        let roster = roster(&["Beto"]);
        assert!(roster.contains(" beto "));
        assert!(!roster.contains("Caro"));
        assert!(!roster.contains(""));
    }
}
