//! Employee entity model

use crate::models::core::person::Person;
use crate::models::core::traits::{Details, PersonRecord};
use std::fmt;

/// A person working in a department
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Employee {
    /// The underlying Person record
    person: Person,
    department: String,
}

impl Employee {
    /// Create a new Employee
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: i32,
        job: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self::from_person(Person::new(name, age, job), department)
    }

    /// Create a new Employee from an existing Person
    #[must_use]
    pub fn from_person(person: Person, department: impl Into<String>) -> Self {
        Self {
            person,
            department: department.into(),
        }
    }

    /// Get the department
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Drop the employee fields and keep the base record
    #[must_use]
    pub fn into_person(self) -> Person {
        self.person
    }
}

impl PersonRecord for Employee {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl Details for Employee {
    fn get_details(&self) -> String {
        format!("{}, Department: {}", self.person.get_details(), self.department)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}
