//! Derived models module
//!
//! This module contains the role variants built on top of the core Person
//! record.

pub mod employee;
pub mod professor;
pub mod student;
pub mod student_professor;

pub use employee::Employee;
pub use professor::Professor;
pub use student::Student;
pub use student_professor::StudentProfessor;
