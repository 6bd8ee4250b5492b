// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod audit;
pub mod fixture;
pub mod import;
pub mod ranking;
pub mod repositories;
pub mod team;
