//! One drag gesture, start to finish.
//!
//! ```text
//! Idle ──begin──▶ Dragging ──hover*──▶ Dragging ──drop_on──▶ Committed | Cancelled
//!                     └────────────cancel──────────────────▶ Cancelled
//! ```
//!
//! Idle is the absence of a session. `drop_on` and `cancel` consume the
//! session, so a verdict can never leak into the next gesture.

use crate::error::DragError;
use crate::policy::PolicyTable;
use crate::result::ValidationResult;
use crate::validators::{ReorderOperation, is_section_draggable};
use crate::vocab::{CurrentSections, DragItem, DropZone, GroupId, Section};

/// How a gesture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The move passed validation at drop time and may be applied.
    Committed(ReorderOperation),
    /// Dropped somewhere illegal (`reason` set) or aborted (`reason` empty).
    Cancelled { reason: Option<String> },
}

#[derive(Debug)]
pub struct DragSession<'p> {
    policy: &'p PolicyTable,
    item: DragItem,
    last: Option<ValidationResult>,
}

impl DragSession<'static> {
    /// Start dragging `section` from `index` of `group` under the built-in policy.
    pub fn begin(section: &Section, group: GroupId, index: usize) -> Result<Self, DragError> {
        DragSession::begin_with(PolicyTable::default_table(), section, group, index)
    }
}

impl<'p> DragSession<'p> {
    pub fn begin_with(
        policy: &'p PolicyTable,
        section: &Section,
        group: GroupId,
        index: usize,
    ) -> Result<Self, DragError> {
        if !is_section_draggable(section) {
            return Err(DragError::NotDraggable(section.id.clone()));
        }
        tracing::trace!(section = %section.id, %group, index, "drag started");
        Ok(Self {
            policy,
            item: DragItem::from_section(section, group, index),
            last: None,
        })
    }

    pub fn item(&self) -> &DragItem {
        &self.item
    }

    /// Verdict for the most recent pointer position, if any.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last.as_ref()
    }

    /// Re-validate for a new pointer position against the latest snapshot.
    pub fn hover(
        &mut self,
        drop_zone: Option<&DropZone>,
        current: &CurrentSections,
    ) -> &ValidationResult {
        let result = self
            .policy
            .validate_drag_operation(&self.item, drop_zone, current);
        self.last.insert(result)
    }

    /// Groups worth highlighting while this item is in flight.
    pub fn valid_zones(&self, all_groups: &[GroupId]) -> Vec<GroupId> {
        self.policy.get_valid_drop_zones(&self.item, all_groups)
    }

    /// End the gesture by dropping. Validation is re-run on `current`; the
    /// last hover verdict is not trusted.
    pub fn drop_on(self, drop_zone: Option<&DropZone>, current: &CurrentSections) -> DragOutcome {
        let result = self
            .policy
            .validate_drag_operation(&self.item, drop_zone, current);
        match drop_zone {
            Some(zone) if result.is_valid => DragOutcome::Committed(ReorderOperation {
                section_id: self.item.id,
                from_group: self.item.group_id,
                to_group: zone.group_id,
                from_index: self.item.index,
                to_index: zone.index,
            }),
            _ => DragOutcome::Cancelled {
                reason: result.reason,
            },
        }
    }

    pub fn cancel(self) -> DragOutcome {
        tracing::trace!(section = %self.item.id, "drag cancelled");
        DragOutcome::Cancelled { reason: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SectionKind;

    fn page() -> CurrentSections {
        CurrentSections::from([
            (
                GroupId::Template,
                vec![
                    Section::new("hero", SectionKind::ImageBanner),
                    Section::new("grid", SectionKind::ProductGrid),
                    Section::new("faq", SectionKind::Faq),
                ],
            ),
            (
                GroupId::FooterGroup,
                vec![Section::new("footer", SectionKind::Footer)],
            ),
        ])
    }

    #[test]
    fn hidden_section_cannot_start_a_drag() {
        let section = Section::new("secret", SectionKind::RichText).hidden();
        let err = DragSession::begin(&section, GroupId::Template, 0).unwrap_err();
        assert_eq!(err, DragError::NotDraggable("secret".to_string()));
    }

    #[test]
    fn hover_keeps_only_the_latest_verdict() {
        let current = page();
        let mut session =
            DragSession::begin(&current[&GroupId::Template][1], GroupId::Template, 1).unwrap();
        assert!(session.last_result().is_none());

        let footer = DropZone::new(GroupId::FooterGroup, 0);
        assert!(!session.hover(Some(&footer), &current).is_valid);

        let top = DropZone::new(GroupId::Template, 0);
        assert!(session.hover(Some(&top), &current).is_valid);
        assert_eq!(session.last_result(), Some(&ValidationResult::valid()));
    }

    #[test]
    fn valid_drop_commits_the_move() {
        let current = page();
        let session =
            DragSession::begin(&current[&GroupId::Template][1], GroupId::Template, 1).unwrap();
        let outcome = session.drop_on(Some(&DropZone::new(GroupId::Template, 0)), &current);
        assert_eq!(
            outcome,
            DragOutcome::Committed(ReorderOperation {
                section_id: "grid".to_string(),
                from_group: GroupId::Template,
                to_group: GroupId::Template,
                from_index: 1,
                to_index: 0,
            })
        );
    }

    #[test]
    fn illegal_drop_cancels_with_reason() {
        let current = page();
        let session =
            DragSession::begin(&current[&GroupId::Template][2], GroupId::Template, 2).unwrap();
        let outcome = session.drop_on(Some(&DropZone::new(GroupId::FooterGroup, 1)), &current);
        assert_eq!(
            outcome,
            DragOutcome::Cancelled {
                reason: Some("Cannot move from template to footerGroup".to_string()),
            }
        );
    }

    #[test]
    fn drop_outside_any_zone_cancels() {
        let current = page();
        let session =
            DragSession::begin(&current[&GroupId::Template][0], GroupId::Template, 0).unwrap();
        assert_eq!(
            session.drop_on(None, &current),
            DragOutcome::Cancelled {
                reason: Some("Invalid drop zone".to_string()),
            }
        );
    }

    #[test]
    fn explicit_abort_has_no_reason() {
        let current = page();
        let session =
            DragSession::begin(&current[&GroupId::Template][0], GroupId::Template, 0).unwrap();
        assert_eq!(session.valid_zones(&GroupId::ALL), vec![GroupId::Template]);
        assert_eq!(session.cancel(), DragOutcome::Cancelled { reason: None });
    }
}
