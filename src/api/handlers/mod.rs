pub mod admin;
pub mod matches;
pub mod rankings;
pub mod teams;
