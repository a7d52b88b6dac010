//! Validation against the live page: the entry points the editor calls.
//!
//! Unlike [`crate::rules`], these checks read the current contents of each
//! group. The caller passes the latest snapshot on every call; nothing here
//! caches between calls.

use crate::policy::PolicyTable;
use crate::result::{Rejection, ValidationResult};
use crate::vocab::{CurrentSections, DragItem, DropZone, GroupId, Section, sections_in};
use serde::{Deserialize, Serialize};

/// One move in a batch commit (undo/redo replay, external reorder command).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOperation {
    pub section_id: String,
    pub from_group: GroupId,
    pub to_group: GroupId,
    pub from_index: usize,
    pub to_index: usize,
}

impl PolicyTable {
    /// Full check of a candidate move against the current page.
    pub fn validate_drag_operation(
        &self,
        drag_item: &DragItem,
        drop_zone: Option<&DropZone>,
        current: &CurrentSections,
    ) -> ValidationResult {
        match self.check_drag_operation(drag_item, drop_zone, current) {
            Ok(()) => {
                tracing::trace!(item = %drag_item.id, "drag accepted");
                ValidationResult::valid()
            }
            Err(rejection) => {
                tracing::debug!(
                    item = %drag_item.id,
                    class = rejection.class(),
                    reason = %rejection,
                    "drag rejected"
                );
                ValidationResult::rejected(&rejection)
            }
        }
    }

    /// [`PolicyTable::validate_drag_operation`] with the typed rejection.
    pub fn check_drag_operation(
        &self,
        drag_item: &DragItem,
        drop_zone: Option<&DropZone>,
        current: &CurrentSections,
    ) -> Result<(), Rejection> {
        let Some(zone) = drop_zone else {
            return Err(Rejection::InvalidDropZone);
        };

        self.validate_drop(drag_item, Some(zone))?;

        let restrictions = self.restrictions(zone.group_id);
        let target = sections_in(current, zone.group_id);

        if restrictions.fixed_order.is_some()
            && !self.validate_fixed_order(zone.group_id, drag_item.kind, zone.index, target)
        {
            return Err(Rejection::FixedOrderViolation {
                group: zone.group_id,
                kind: drag_item.kind,
            });
        }

        if let Some(max_items) = zone.max_items.or(restrictions.max_items) {
            if target.len() >= max_items {
                return Err(Rejection::MaxItemsReached {
                    group: zone.group_id,
                    max_items,
                });
            }
        }

        Ok(())
    }

    /// Cross-group swaps are never legal; same-group swaps need both kinds accepted.
    pub fn can_swap_sections(
        &self,
        a: &Section,
        b: &Section,
        group_a: GroupId,
        group_b: GroupId,
    ) -> bool {
        group_a == group_b
            && self.can_group_receive_type(group_a, a.kind)
            && self.can_group_receive_type(group_a, b.kind)
    }

    /// All-or-nothing check of a batch of moves.
    pub fn validate_batch_reorder(&self, operations: &[ReorderOperation]) -> ValidationResult {
        let offending = operations
            .iter()
            .find(|op| !self.can_move_to_group(op.from_group, op.to_group));

        match offending {
            None => ValidationResult::valid(),
            Some(op) => {
                let rejection = Rejection::BatchCrossGroupMove {
                    section_id: op.section_id.clone(),
                    from: op.from_group,
                    to: op.to_group,
                };
                tracing::debug!(
                    operations = operations.len(),
                    section_id = %op.section_id,
                    reason = %rejection,
                    "batch reorder rejected"
                );
                ValidationResult::rejected(&rejection)
            }
        }
    }

    /// Every group in `all_groups` the item could be dropped into, in input order.
    pub fn get_valid_drop_zones(
        &self,
        drag_item: &DragItem,
        all_groups: &[GroupId],
    ) -> Vec<GroupId> {
        all_groups
            .iter()
            .copied()
            .filter(|group| {
                self.can_move_to_group(drag_item.group_id, *group)
                    && self.can_group_receive_type(*group, drag_item.kind)
            })
            .collect()
    }
}

pub fn validate_drag_operation(
    drag_item: &DragItem,
    drop_zone: Option<&DropZone>,
    current: &CurrentSections,
) -> ValidationResult {
    PolicyTable::default_table().validate_drag_operation(drag_item, drop_zone, current)
}

pub fn can_swap_sections(a: &Section, b: &Section, group_a: GroupId, group_b: GroupId) -> bool {
    PolicyTable::default_table().can_swap_sections(a, b, group_a, group_b)
}

pub fn validate_batch_reorder(operations: &[ReorderOperation]) -> ValidationResult {
    PolicyTable::default_table().validate_batch_reorder(operations)
}

pub fn get_valid_drop_zones(drag_item: &DragItem, all_groups: &[GroupId]) -> Vec<GroupId> {
    PolicyTable::default_table().get_valid_drop_zones(drag_item, all_groups)
}

/// Hidden sections never start a drag.
pub fn is_section_draggable(section: &Section) -> bool {
    section.visible
}
