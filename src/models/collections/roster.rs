//! Roster collection implementation
//!
//! This module provides an ordered collection of [`Member`] values with
//! lookups by name, by kind and by capability.

use crate::error::{EntityError, Result};
use crate::models::core::traits::{Details, Graded, PersonRecord, Teaching};
use crate::models::member::{Member, MemberKind};
use log::debug;

/// An ordered collection of members
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Members in insertion order
    members: Vec<Member>,
}

impl Roster {
    /// Create a new empty `Roster`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Add a member to the end of the roster
    pub fn add(&mut self, member: impl Into<Member>) {
        let member = member.into();
        debug!("Adding {} '{}' to roster", member.kind(), member.name());
        self.members.push(member);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Find the first member with the given name
    pub fn find_by_name(&self, name: &str) -> Result<&Member> {
        self.members
            .iter()
            .find(|member| member.name() == name)
            .ok_or_else(|| {
                debug!("No member named '{name}' in roster of {}", self.members.len());
                EntityError::NotFound(name.to_string())
            })
    }

    /// Filter members by a predicate function
    pub fn filter<F>(&self, predicate: F) -> Vec<&Member>
    where
        F: Fn(&Member) -> bool,
    {
        self.members.iter().filter(|m| predicate(m)).collect()
    }

    /// Get members of a specific kind
    #[must_use]
    pub fn of_kind(&self, kind: MemberKind) -> Vec<&Member> {
        self.filter(|member| member.kind() == kind)
    }

    /// Get every member that carries a grade
    #[must_use]
    pub fn graded(&self) -> Vec<&dyn Graded> {
        self.members.iter().filter_map(Member::as_graded).collect()
    }

    /// Get every member that teaches courses
    #[must_use]
    pub fn teaching(&self) -> Vec<&dyn Teaching> {
        self.members.iter().filter_map(Member::as_teaching).collect()
    }

    /// Render one details line per member
    #[must_use]
    pub fn details(&self) -> Vec<String> {
        self.members.iter().map(Details::get_details).collect()
    }
}

impl FromIterator<Member> for Roster {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        let mut roster = Self::new();
        roster.extend(iter);
        roster
    }
}

impl Extend<Member> for Roster {
    fn extend<I: IntoIterator<Item = Member>>(&mut self, iter: I) {
        for member in iter {
            self.add(member);
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
