use std::fmt;

use serde::Serialize;

use super::Name;

/// One gift: `giver` buys for `receiver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    /// The participant giving the gift.
    pub giver: Name,
    /// The participant receiving it.
    pub receiver: Name,
}

impl Pair {
    /// Renders the pair as a sentence, passing each name through `style`.
    #[must_use]
    pub fn render_with<F>(&self, style: F) -> String
    where
        F: Fn(&str) -> String,
    {
        format!(
            "{} gives to {}",
            style(self.giver.as_str()),
            style(self.receiver.as_str())
        )
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_with(str::to_owned))
    }
}

/// The complete result of a successful draw.
///
/// Givers appear in roster order, receivers are a permutation of the roster
/// and nobody receives from themself. A pairing is only ever built whole by
/// the assigner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pairing(Vec<Pair>);

impl Pairing {
    pub(crate) const fn new(pairs: Vec<Pair>) -> Self {
        Self(pairs)
    }

    /// The pairs, in giver (roster) order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.0
    }

    /// Number of pairs. Always equal to the size of the roster it came from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no pairs. Never true for a pairing from `assign`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up who `giver` buys for.
    #[must_use]
    pub fn receiver_of(&self, giver: &Name) -> Option<&Name> {
        self.0
            .iter()
            .find(|pair| &pair.giver == giver)
            .map(|pair| &pair.receiver)
    }

    /// Iterates over the pairs.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Pairing {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, pair) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{pair}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(giver: &str, receiver: &str) -> Pair {
        Pair {
            giver: Name::new(giver).unwrap(),
            receiver: Name::new(receiver).unwrap(),
        }
    }

    #[test]
    fn pair_renders_as_sentence() {
        assert_eq!(pair("Ana", "Caro").to_string(), "Ana gives to Caro");
    }

    #[test]
    fn styled_rendering_keeps_the_sentence() {
        let styled = pair("Ana", "Caro").render_with(|name| format!("*{name}*"));
        assert_eq!(styled, "*Ana* gives to *Caro*");
    }

    #[test]
    fn pairing_renders_one_line_per_pair() {
        let pairing = Pairing::new(vec![pair("Ana", "Beto"), pair("Beto", "Ana")]);
        assert_eq!(pairing.to_string(), "Ana gives to Beto\nBeto gives to Ana");
    }

    #[test]
    fn receiver_lookup_uses_exact_name() {
        let pairing = Pairing::new(vec![pair("Ana", "Beto"), pair("Beto", "Ana")]);
        assert_eq!(
            pairing.receiver_of(&Name::new("Ana").unwrap()).map(Name::as_str),
            Some("Beto")
        );
        assert_eq!(pairing.receiver_of(&Name::new("ana").unwrap()), None);
    }

    #[test]
    fn serializes_as_list_of_objects() {
        let pairing = Pairing::new(vec![pair("Ana", "Beto")]);
        let json = serde_json::to_value(&pairing).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "giver": "Ana", "receiver": "Beto" }])
        );
    }
}
