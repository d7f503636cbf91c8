//! Student-professor entity model
//!
//! A person who both studies and teaches. It holds the base record, the
//! courses and the grade side by side instead of wrapping a [`Student`] and a
//! [`Professor`], and formats its own summary so the base fields are written
//! once.
//!
//! [`Student`]: crate::models::derived::Student
//! [`Professor`]: crate::models::derived::Professor

use crate::models::core::person::Person;
use crate::models::core::traits::{Details, Graded, PersonRecord, Teaching};
use crate::models::core::types::CourseList;
use std::fmt;

/// A person with both a grade and a list of courses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentProfessor {
    /// The underlying Person record
    person: Person,
    courses: CourseList,
    grade: String,
}

impl StudentProfessor {
    /// Create a new `StudentProfessor`
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: i32,
        job: impl Into<String>,
        courses: impl Into<CourseList>,
        grade: impl Into<String>,
    ) -> Self {
        Self::from_person(Person::new(name, age, job), courses, grade)
    }

    /// Create a new `StudentProfessor` from an existing Person
    #[must_use]
    pub fn from_person(
        person: Person,
        courses: impl Into<CourseList>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            person,
            courses: courses.into(),
            grade: grade.into(),
        }
    }

    /// Drop the grade and courses and keep the base record
    #[must_use]
    pub fn into_person(self) -> Person {
        self.person
    }
}

impl PersonRecord for StudentProfessor {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl Graded for StudentProfessor {
    fn grade(&self) -> &str {
        &self.grade
    }
}

impl Teaching for StudentProfessor {
    fn courses(&self) -> &CourseList {
        &self.courses
    }
}

impl Details for StudentProfessor {
    fn get_details(&self) -> String {
        format!(
            "Name: {}, Age: {}, Job: {}, Courses: {}, Grade: {}",
            self.person.name(),
            self.person.age(),
            self.person.job(),
            self.courses,
            self.grade
        )
    }
}

impl fmt::Display for StudentProfessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}
