// Infrastructure layer module
// Contains database adapters and audit sinks
// Follows Hexagonal Architecture

pub mod audit;
pub mod repositories;
