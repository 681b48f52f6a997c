//! Secret Friend gift exchange
//!
//! Participants are collected into a [`Roster`], then [`assign`] draws who
//! gives a gift to whom so that nobody draws themself.

pub mod domain;
pub use domain::{
    AssignError, Config, IndexSource, MIN_PARTICIPANTS, Name, Pair, Pairing, Roster, RosterError,
    assign,
};

pub mod session;
pub use session::{Draw, Rejection, Session};
