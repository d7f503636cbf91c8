//! Core models module
//!
//! This module contains the base person record, the capability traits that
//! person variants implement, and shared value types.

pub mod person;
pub mod traits;
pub mod types;

pub use person::Person;
pub use traits::*;
pub use types::*;
