// Application services
// Record store rules layered over the repository ports

pub mod championship;
pub mod errors;

pub use championship::ChampionshipService;
pub use errors::{ChampionshipError, ChampionshipResult};
