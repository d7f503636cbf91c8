//! Tagged union over all person variants
//!
//! [`Member`] lets callers keep people of different kinds in one place while
//! still being able to narrow back to the concrete type.

use crate::error::{EntityError, Result};
use crate::models::core::person::Person;
use crate::models::core::traits::{Details, Graded, PersonRecord, Teaching};
use crate::models::derived::{Employee, Professor, Student, StudentProfessor};
use std::fmt;

/// Kind of person held by a [`Member`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Plain person without a role
    Person,
    /// Student with a grade
    Student,
    /// Professor with courses
    Professor,
    /// Employee with a department
    Employee,
    /// Both grade and courses
    StudentProfessor,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Person => "Person",
            Self::Student => "Student",
            Self::Professor => "Professor",
            Self::Employee => "Employee",
            Self::StudentProfessor => "StudentProfessor",
        };
        f.write_str(name)
    }
}

/// Any person variant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Person(Person),
    Student(Student),
    Professor(Professor),
    Employee(Employee),
    StudentProfessor(StudentProfessor),
}

impl Member {
    /// Get the kind of person held
    #[must_use]
    pub const fn kind(&self) -> MemberKind {
        match self {
            Self::Person(_) => MemberKind::Person,
            Self::Student(_) => MemberKind::Student,
            Self::Professor(_) => MemberKind::Professor,
            Self::Employee(_) => MemberKind::Employee,
            Self::StudentProfessor(_) => MemberKind::StudentProfessor,
        }
    }

    /// View the member as graded, if it carries a grade
    #[must_use]
    pub fn as_graded(&self) -> Option<&dyn Graded> {
        match self {
            Self::Student(s) => Some(s),
            Self::StudentProfessor(sp) => Some(sp),
            _ => None,
        }
    }

    /// View the member as teaching, if it carries courses
    #[must_use]
    pub fn as_teaching(&self) -> Option<&dyn Teaching> {
        match self {
            Self::Professor(p) => Some(p),
            Self::StudentProfessor(sp) => Some(sp),
            _ => None,
        }
    }

    fn as_details(&self) -> &dyn Details {
        match self {
            Self::Person(p) => p,
            Self::Student(s) => s,
            Self::Professor(p) => p,
            Self::Employee(e) => e,
            Self::StudentProfessor(sp) => sp,
        }
    }
}

impl PersonRecord for Member {
    fn person(&self) -> &Person {
        match self {
            Self::Person(p) => p,
            Self::Student(s) => s.person(),
            Self::Professor(p) => p.person(),
            Self::Employee(e) => e.person(),
            Self::StudentProfessor(sp) => sp.person(),
        }
    }
}

impl Details for Member {
    fn get_details(&self) -> String {
        self.as_details().get_details()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_details())
    }
}

macro_rules! member_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Member {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Member> for $variant {
                type Error = EntityError;

                fn try_from(member: Member) -> Result<Self> {
                    match member {
                        Member::$variant(value) => Ok(value),
                        other => Err(EntityError::VariantMismatch {
                            expected: MemberKind::$variant,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

member_conversions!(Person, Student, Professor, Employee, StudentProfessor);
