//! The event-driven layer between a front-end and the core.
//!
//! A [`Session`] owns the roster, the random source and the configuration.
//! Front-ends feed it user actions and present whatever it returns; the
//! session itself never prints.

use std::num::NonZeroU32;

use rand::{SeedableRng, rngs::StdRng};
use tracing::instrument;

use crate::domain::{
    AssignError, Config, IndexSource, Name, Pairing, Roster, RosterError, assign,
};

/// Any reason a user action was refused.
///
/// Every variant is recoverable: the user corrects the input or tries again.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Rejection {
    /// A name could not be added.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A draw produced no pairing.
    #[error(transparent)]
    Draw(#[from] AssignError),
}

/// A successful draw together with how many shuffles it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The pairing.
    pub pairing: Pairing,
    /// Number of shuffles used, starting at 1.
    pub attempts: NonZeroU32,
}

/// A single user's gift-exchange session.
#[derive(Debug)]
pub struct Session<S = StdRng> {
    roster: Roster,
    source: S,
    config: Config,
    last_draw: Option<Pairing>,
}

impl Session<StdRng> {
    /// Creates a session drawing from an entropy-seeded generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_source(config, StdRng::from_entropy())
    }

    /// Creates a session whose draws are reproducible for a given seed.
    #[must_use]
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::with_source(config, StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise.
    #[must_use]
    pub fn with_seed(config: Config, seed: Option<u64>) -> Self {
        let source = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::with_source(config, source)
    }
}

impl<S: IndexSource> Session<S> {
    /// Creates a session drawing from `source`.
    #[must_use]
    pub const fn with_source(config: Config, source: S) -> Self {
        Self {
            roster: Roster::new(),
            source,
            config,
            last_draw: None,
        }
    }

    /// Adds a participant from raw input.
    ///
    /// # Errors
    ///
    /// Returns the roster's refusal if the input is blank or a duplicate.
    pub fn add(&mut self, input: &str) -> Result<Name, Rejection> {
        self.roster.add(input).map_err(|e| {
            tracing::debug!(error = %e, "name rejected");
            Rejection::from(e)
        })
    }

    /// Clears the roster and forgets the last draw.
    pub fn reset(&mut self) {
        self.roster.reset();
        self.last_draw = None;
    }

    /// Draws a fresh pairing, shuffling up to `max_attempts` times.
    ///
    /// The previous result is discarded before drawing, so a failed request
    /// leaves no stale pairing behind.
    ///
    /// # Errors
    ///
    /// - [`AssignError::TooFewParticipants`] straight away for small rosters
    /// - [`AssignError::SelfAssignment`] if every attempt hit a fixed point
    #[instrument(level = "debug", skip(self), fields(size = self.roster.len()))]
    pub fn draw(&mut self) -> Result<Draw, Rejection> {
        self.last_draw = None;
        let max_attempts = self.config.max_attempts();
        let mut attempt = NonZeroU32::MIN;

        loop {
            match assign(self.roster.list(), &mut self.source) {
                Ok(pairing) => {
                    tracing::info!(attempts = attempt.get(), "draw succeeded");
                    self.last_draw = Some(pairing.clone());
                    return Ok(Draw {
                        pairing,
                        attempts: attempt,
                    });
                }
                Err(AssignError::SelfAssignment { .. }) if attempt < max_attempts => {
                    tracing::debug!(attempt = attempt.get(), "retrying after self-assignment");
                    attempt = attempt.saturating_add(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// The participants, in the order they were added.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The result of the most recent successful draw, if it is still current.
    #[must_use]
    pub const fn last_draw(&self) -> Option<&Pairing> {
        self.last_draw.as_ref()
    }

    /// The session's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
