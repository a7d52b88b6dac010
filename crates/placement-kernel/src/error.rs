//! Error types for placement kernel operations.
//!
//! Refused moves are not errors (see [`crate::result::Rejection`]). These
//! cover a malformed policy table and misuse of a drag session.

use crate::vocab::{GroupId, SectionKind};

/// A policy table that is incomplete or internally inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Every group must have exactly one restrictions entry.
    #[error("policy table has no entry for group {0}")]
    MissingGroup(GroupId),

    /// Two keys that spell the same group, e.g. `header-group` and `headerGroup`.
    #[error("policy table has more than one entry for group {0}")]
    DuplicateGroup(GroupId),

    /// `canMoveTo` and `canReceiveFrom` disagree about a route.
    #[error("route {from} -> {to} is declared by {declared_by} but not mirrored by {missing_on}")]
    AsymmetricRoute {
        from: GroupId,
        to: GroupId,
        declared_by: GroupId,
        missing_on: GroupId,
    },

    /// A fixed-order kind the group can never hold.
    #[error("group {group} lists {kind} in fixedOrder but does not accept it")]
    FixedOrderKindNotAllowed { group: GroupId, kind: SectionKind },

    #[error("group {group} lists {kind} more than once in fixedOrder")]
    DuplicateFixedOrderKind { group: GroupId, kind: SectionKind },

    /// Only one group may define its accepted kinds negatively.
    #[error("groups {first} and {second} both use dynamic membership (empty allowedTypes)")]
    MultipleDynamicGroups { first: GroupId, second: GroupId },

    #[error("group {0} declares maxItems = 0")]
    ZeroMaxItems(GroupId),

    #[error("failed to parse policy: {0}")]
    Parse(String),

    #[error("failed to render policy: {0}")]
    Render(String),

    #[error("failed to read policy at {path}: {message}")]
    Io { path: String, message: String },
}

/// Misuse of a drag session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// Hidden sections never start a drag.
    #[error("section {0} is hidden and cannot be dragged")]
    NotDraggable(String),
}
