//! Collections of person models

pub mod roster;

pub use roster::Roster;
