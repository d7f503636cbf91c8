//! Error handling for the roster models.
//!
//! Constructing an entity never fails. Errors only come from the
//! [`Member`](crate::models::Member) and [`Roster`](crate::models::Roster)
//! layer, when a caller asks for a variant or a name that is not there.

use crate::models::MemberKind;

/// Errors produced when narrowing or looking up members
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// A member was converted into a variant it does not hold
    #[error("Variant mismatch: expected {expected} but found {found}")]
    VariantMismatch {
        /// The variant the caller asked for
        expected: MemberKind,
        /// The variant actually held by the member
        found: MemberKind,
    },

    /// No member with the requested name exists
    #[error("No member named '{0}'")]
    NotFound(String),
}

/// Result type for roster model operations
pub type Result<T> = std::result::Result<T, EntityError>;
