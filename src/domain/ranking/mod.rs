// Ranking engine
// Derives group standings and qualifiers from teams and match results

pub mod engine;
pub mod standing;

pub use engine::{compute_rankings, RankingError, QUALIFIERS_PER_GROUP};
pub use standing::{Rankings, Standing};
