//! A Rust library modelling people in different roles (students,
//! professors, employees and student-professors) with canonical detail
//! strings, plus a fixed-layout geographic location value.

pub mod error;
pub mod models;

// Re-export the most common types for easier use
pub use error::{EntityError, Result};
pub use models::{
    CourseList, Details, Employee, Graded, Location, Member, MemberKind, Person, PersonRecord,
    Professor, Roster, Student, StudentProfessor, Teaching,
};
