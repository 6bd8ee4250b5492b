// Team domain module
// Contains team aggregate root, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::{Team, TeamError};
pub use value_objects::{GroupNumber, RegistrationDate, ValueError, MAX_TEAMS_PER_GROUP};
