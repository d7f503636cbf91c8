//! Professor entity model
//!
//! A professor is a [`Person`] with an ordered list of courses.

use crate::models::core::person::Person;
use crate::models::core::traits::{Details, PersonRecord, Teaching};
use crate::models::core::types::CourseList;
use std::fmt;

/// A person teaching one or more courses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Professor {
    /// The underlying Person record
    person: Person,
    courses: CourseList,
}

impl Professor {
    /// Create a new Professor
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: i32,
        job: impl Into<String>,
        courses: impl Into<CourseList>,
    ) -> Self {
        Self::from_person(Person::new(name, age, job), courses)
    }

    /// Create a new Professor from an existing Person
    #[must_use]
    pub fn from_person(person: Person, courses: impl Into<CourseList>) -> Self {
        Self {
            person,
            courses: courses.into(),
        }
    }

    /// Drop the professor fields and keep the base record
    #[must_use]
    pub fn into_person(self) -> Person {
        self.person
    }
}

impl PersonRecord for Professor {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl Teaching for Professor {
    fn courses(&self) -> &CourseList {
        &self.courses
    }
}

impl Details for Professor {
    fn get_details(&self) -> String {
        format!("{}, Courses: {}", self.person.get_details(), self.courses)
    }
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}
