//! Domain models for the gift exchange.
//!
//! This module contains the participant roster, the random assigner and the
//! session configuration.

/// Participant names.
pub mod name;
pub use name::{EmptyNameError, Name};

/// The ordered, case-insensitively unique list of participants.
pub mod roster;
pub use roster::{Error as RosterError, Roster};

pub mod assigner;
pub use assigner::{Error as AssignError, IndexSource, MIN_PARTICIPANTS, assign};

mod pairing;
pub use pairing::{Pair, Pairing};

mod config;
pub use config::{Config, ConfigError};
