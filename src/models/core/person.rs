//! Core Person entity definition
//!
//! This module contains the base Person record that every person variant
//! embeds.

use crate::models::core::traits::{Details, PersonRecord};
use std::fmt;

/// Base record shared by all person variants
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: i32,
    job: String,
}

impl Person {
    /// Create a new Person
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            job: job.into(),
        }
    }

    /// Get the name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the age
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Get the job
    #[must_use]
    pub fn job(&self) -> &str {
        &self.job
    }
}

impl Details for Person {
    fn get_details(&self) -> String {
        format!("Name: {}, Age: {}, Job: {}", self.name, self.age, self.job)
    }
}

impl PersonRecord for Person {
    fn person(&self) -> &Person {
        self
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}
