//! Membership roles binding members to projects.

/// Role values as stored in the `relationships.role` column.
pub mod roles {
    pub const PARTICIPANT: i16 = 0;
    pub const OWNER: i16 = 1;
}

/// The resolved membership of a member in a project.
///
/// A single relationship lookup yields one of three states; `Owner` and
/// `Participant` are mutually exclusive and both absent when no
/// relationship row exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    NoRelationship,
    Owner,
    Participant,
}

impl Membership {
    /// Decode a relationship row's role column; `None` means no row existed.
    pub fn from_role(role: Option<i16>) -> Self {
        match role {
            Some(roles::OWNER) => Membership::Owner,
            Some(_) => Membership::Participant,
            None => Membership::NoRelationship,
        }
    }

    pub fn is_owner(self) -> bool {
        self == Membership::Owner
    }

    pub fn is_partner(self) -> bool {
        self == Membership::Participant
    }

    /// Any recorded relationship, owner or participant.
    pub fn exists(self) -> bool {
        self != Membership::NoRelationship
    }
}
