// Fixture domain module
// Played matches between two teams of the same group

#![allow(clippy::module_inception)]

pub mod events;
pub mod fixture;

pub use events::MatchEvent;
pub use fixture::{Match, MatchError, MatchId, NewMatch, Outcome};
