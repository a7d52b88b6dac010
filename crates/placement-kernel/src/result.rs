//! Verdicts returned to the editor.
//!
//! A rejected move is ordinary data. `Rejection` names the reason with enough
//! structure to test by equality; `ValidationResult` is the flattened shape the
//! UI renders (`isValid`, `reason`, `suggestedAction`).

use crate::vocab::{GroupId, SectionKind};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
///
/// The `Display` text is the user-facing reason and is kept stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("No valid drop zone")]
    NoDropZone,

    #[error("Invalid drop zone")]
    InvalidDropZone,

    #[error("Cannot move from {from} to {to}")]
    CrossGroupMove { from: GroupId, to: GroupId },

    #[error("{group} does not accept {kind} sections")]
    TypeNotAccepted { group: GroupId, kind: SectionKind },

    #[error("Cannot drop on itself")]
    SelfDrop,

    #[error("Would violate the fixed order of sections")]
    FixedOrderViolation { group: GroupId, kind: SectionKind },

    #[error("{group} can hold at most {max_items} sections")]
    MaxItemsReached { group: GroupId, max_items: usize },

    /// The offending section is carried for logging; the reason names only the route.
    #[error("Invalid move in batch: {from} to {to}")]
    BatchCrossGroupMove {
        section_id: String,
        from: GroupId,
        to: GroupId,
    },
}

impl Rejection {
    /// Friendlier hint shown next to the reason.
    pub fn suggested_action(&self) -> &'static str {
        match self {
            Self::CrossGroupMove { .. } | Self::BatchCrossGroupMove { .. } => {
                "Sections can only be reordered within their own group"
            }
            Self::TypeNotAccepted { .. } => "This section type is not allowed in this area",
            Self::SelfDrop => "Move the section to a different position",
            Self::FixedOrderViolation { .. } => "Some sections must maintain a specific order",
            Self::MaxItemsReached { .. } => "Remove a section from this area first",
            Self::InvalidDropZone => "Drop the section in a valid area",
            Self::NoDropZone => "Try dropping in a different location",
        }
    }

    /// Stable machine-readable class, used by the CLI and in logs.
    pub fn class(&self) -> &'static str {
        match self {
            Self::NoDropZone => "no_drop_zone",
            Self::InvalidDropZone => "invalid_drop_zone",
            Self::CrossGroupMove { .. } => "cross_group_move",
            Self::TypeNotAccepted { .. } => "type_not_accepted",
            Self::SelfDrop => "self_drop",
            Self::FixedOrderViolation { .. } => "fixed_order_violation",
            Self::MaxItemsReached { .. } => "max_items_reached",
            Self::BatchCrossGroupMove { .. } => "batch_cross_group_move",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
            suggested_action: None,
        }
    }

    pub fn rejected(rejection: &Rejection) -> Self {
        Self {
            is_valid: false,
            reason: Some(rejection.to_string()),
            suggested_action: Some(rejection.suggested_action().to_string()),
        }
    }
}

impl From<Result<(), Rejection>> for ValidationResult {
    fn from(outcome: Result<(), Rejection>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(rejection) => Self::rejected(&rejection),
        }
    }
}
