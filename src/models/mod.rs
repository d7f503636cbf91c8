//! Domain models for people and places
//!
//! This module contains the person records, their role variants, the
//! [`Member`] union that ties them together, and the unrelated
//! [`Location`] value.

pub mod collections;
pub mod core;
pub mod derived;
pub mod location;
pub mod member;

// Re-export commonly used types
pub use collections::Roster;
pub use self::core::{CourseList, Details, Graded, Person, PersonRecord, Teaching};
pub use derived::{Employee, Professor, Student, StudentProfessor};
pub use location::Location;
pub use member::{Member, MemberKind};
