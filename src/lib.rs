//! Championship API Library
//!
//! Tracks teams and match results of a two-group football championship
//! and ranks each group. Domain logic, the record store service, storage
//! adapters and the HTTP layer live here; `main` only wires them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod telemetry;
