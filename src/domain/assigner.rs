//! Random giver → receiver assignment.
//!
//! The receivers are a Fisher–Yates shuffle of the roster, paired
//! positionally with the roster in its original order. A shuffle that leaves
//! anyone paired with themself is thrown away whole; retrying is up to the
//! caller.

use rand::Rng;
use tracing::instrument;

use super::{
    Name,
    pairing::{Pair, Pairing},
};

/// Smallest roster a draw is attempted for.
///
/// One participant can only give to themself, and with two the only valid
/// outcome is a mutual swap, which is not considered a real draw.
pub const MIN_PARTICIPANTS: usize = 3;

/// A source of uniformly distributed indices.
///
/// Every [`rand::Rng`] is an `IndexSource`. Tests use scripted sources to
/// make shuffles deterministic.
pub trait IndexSource {
    /// Returns an index drawn uniformly from `0..=upper`.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn pick(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Shuffles `items` in place.
///
/// Walks from the last index down to 1, swapping each element with one drawn
/// from `0..=i`. Given a uniform source every permutation is equally likely.
pub fn shuffle<T, S: IndexSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.pick(i);
        items.swap(i, j);
    }
}

/// Draws a pairing for `roster`.
///
/// The roster is not modified. Each call is an independent trial.
///
/// # Errors
///
/// - [`Error::TooFewParticipants`] if the roster has fewer than
///   [`MIN_PARTICIPANTS`] names. Nothing is drawn from `source`.
/// - [`Error::SelfAssignment`] if the shuffle paired someone with themself.
///   No partial pairing is returned; call again for a fresh shuffle.
#[instrument(level = "debug", skip_all, fields(size = roster.len()))]
pub fn assign<S: IndexSource + ?Sized>(roster: &[Name], source: &mut S) -> Result<Pairing, Error> {
    if roster.len() < MIN_PARTICIPANTS {
        return Err(Error::TooFewParticipants {
            count: roster.len(),
        });
    }

    let mut receivers = roster.to_vec();
    shuffle(&mut receivers, source);

    if let Some(giver) = roster
        .iter()
        .zip(&receivers)
        .find_map(|(giver, receiver)| (giver == receiver).then_some(giver))
    {
        tracing::debug!(%giver, "shuffle paired a participant with themself");
        return Err(Error::SelfAssignment {
            participant: giver.clone(),
        });
    }

    tracing::debug!(givers = ?roster, receivers = ?receivers, "draw completed");

    let pairs = roster
        .iter()
        .cloned()
        .zip(receivers)
        .map(|(giver, receiver)| Pair { giver, receiver })
        .collect();

    Ok(Pairing::new(pairs))
}

/// Reasons a draw produced no pairing.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The roster is too small to draw from.
    #[error(
        "at least {min} participants are needed for a draw, but only {count} have been added",
        min = MIN_PARTICIPANTS
    )]
    TooFewParticipants {
        /// How many participants the roster had.
        count: usize,
    },

    /// The shuffle left a participant giving to themself.
    #[error("'{participant}' would have to give a gift to themself; please draw again")]
    SelfAssignment {
        /// The first participant found paired with themself.
        participant: Name,
    },
}
