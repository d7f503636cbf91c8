//! Student entity model
//!
//! A student is a [`Person`] with a grade.

use crate::models::core::person::Person;
use crate::models::core::traits::{Details, Graded, PersonRecord};
use std::fmt;

/// A person enrolled as a student
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    /// The underlying Person record
    person: Person,
    grade: String,
}

impl Student {
    /// Create a new Student
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: i32,
        job: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self::from_person(Person::new(name, age, job), grade)
    }

    /// Create a new Student from an existing Person
    #[must_use]
    pub fn from_person(person: Person, grade: impl Into<String>) -> Self {
        Self {
            person,
            grade: grade.into(),
        }
    }

    /// Drop the student fields and keep the base record
    #[must_use]
    pub fn into_person(self) -> Person {
        self.person
    }
}

impl PersonRecord for Student {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl Graded for Student {
    fn grade(&self) -> &str {
        &self.grade
    }
}

impl Details for Student {
    fn get_details(&self) -> String {
        format!("{}, Grade: {}", self.person.get_details(), self.grade)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}
