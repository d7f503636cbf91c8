//! Trait definitions for person models
//!
//! Person variants share behaviour through small capability traits rather
//! than a common parent. A type opts into each capability it actually has,
//! so a student-professor is simply a type that implements both [`Graded`]
//! and [`Teaching`].

use crate::models::core::person::Person;
use crate::models::core::types::CourseList;

/// A trait for models that render a single-line summary of their fields.
pub trait Details {
    /// Render the comma separated `Key: value` summary.
    ///
    /// Every field appears exactly once and in a fixed order, starting with
    /// the base `Name`, `Age` and `Job` fields.
    fn get_details(&self) -> String;
}

/// A trait for models built around a base [`Person`] record.
///
/// The provided accessors read through to the embedded person, so variants
/// never duplicate the base fields.
pub trait PersonRecord {
    /// Get the underlying base record
    fn person(&self) -> &Person;

    /// Get the person's name
    fn name(&self) -> &str {
        self.person().name()
    }

    /// Get the person's age
    fn age(&self) -> i32 {
        self.person().age()
    }

    /// Get the person's job
    fn job(&self) -> &str {
        self.person().job()
    }
}

/// A trait for models that carry a grade.
pub trait Graded: PersonRecord {
    /// Get the grade
    fn grade(&self) -> &str;
}

/// A trait for models that teach a list of courses.
pub trait Teaching: PersonRecord {
    /// Get the courses, in the order they were given
    fn courses(&self) -> &CourseList;
}
