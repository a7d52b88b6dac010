//! Atomic placement rules.
//!
//! Each rule is a method on [`PolicyTable`] so custom tables get the same
//! semantics, plus a free function over [`PolicyTable::default_table`].
//! A refused move comes back as `false` or a [`Rejection`], never a panic.

use crate::policy::PolicyTable;
use crate::result::Rejection;
use crate::vocab::{DragItem, DropZone, GroupId, Section, SectionKind};

impl PolicyTable {
    /// Same-group moves are always structurally legal; anything else needs a route.
    pub fn can_move_to_group(&self, source: GroupId, target: GroupId) -> bool {
        source == target || self.restrictions(source).can_move_to.contains(&target)
    }

    pub fn can_group_receive_type(&self, group: GroupId, kind: SectionKind) -> bool {
        let restrictions = self.restrictions(group);
        if restrictions.is_dynamic() {
            !self.exclusive_kinds().contains(&kind)
        } else {
            restrictions.allowed_types.contains(&kind)
        }
    }

    /// Would inserting `kind` at `target_index` of `sections` break the group's fixed order?
    ///
    /// Only kinds listed in the fixed order constrain each other; unordered
    /// kinds may sit anywhere. An index past the end means "append".
    pub fn validate_fixed_order(
        &self,
        group: GroupId,
        kind: SectionKind,
        target_index: usize,
        sections: &[Section],
    ) -> bool {
        let restrictions = self.restrictions(group);
        let Some(position) = restrictions.fixed_position(kind) else {
            return true;
        };

        let (before, after) = sections.split_at(target_index.min(sections.len()));
        let ordered = |section: &Section| restrictions.fixed_position(section.kind);

        before.iter().filter_map(ordered).all(|other| other <= position)
            && after.iter().filter_map(ordered).all(|other| other >= position)
    }

    pub fn can_nest_section(&self, parent: SectionKind, child: SectionKind) -> bool {
        let nesting = self.nesting();
        nesting.containers.contains(&parent) && !nesting.non_nestable.contains(&child)
    }

    /// Two kinds are siblings in `group` when both are accepted there and
    /// their relative order is not fixed.
    pub fn are_sibling_types(&self, a: SectionKind, b: SectionKind, group: GroupId) -> bool {
        if !self.can_group_receive_type(group, a) || !self.can_group_receive_type(group, b) {
            return false;
        }
        let restrictions = self.restrictions(group);
        !(restrictions.fixed_position(a).is_some() && restrictions.fixed_position(b).is_some())
    }

    /// Single-move check. The first failing rule wins.
    pub fn validate_drop(
        &self,
        drag_item: &DragItem,
        drop_zone: Option<&DropZone>,
    ) -> Result<(), Rejection> {
        let Some(zone) = drop_zone else {
            return Err(Rejection::NoDropZone);
        };

        if !self.can_move_to_group(drag_item.group_id, zone.group_id) {
            return Err(Rejection::CrossGroupMove {
                from: drag_item.group_id,
                to: zone.group_id,
            });
        }

        if !self.can_group_receive_type(zone.group_id, drag_item.kind) {
            return Err(Rejection::TypeNotAccepted {
                group: zone.group_id,
                kind: drag_item.kind,
            });
        }

        if drag_item.group_id == zone.group_id && drag_item.index == zone.index {
            return Err(Rejection::SelfDrop);
        }

        Ok(())
    }
}

pub fn can_move_to_group(source: GroupId, target: GroupId) -> bool {
    PolicyTable::default_table().can_move_to_group(source, target)
}

pub fn can_group_receive_type(group: GroupId, kind: SectionKind) -> bool {
    PolicyTable::default_table().can_group_receive_type(group, kind)
}

pub fn validate_fixed_order(
    group: GroupId,
    kind: SectionKind,
    target_index: usize,
    sections: &[Section],
) -> bool {
    PolicyTable::default_table().validate_fixed_order(group, kind, target_index, sections)
}

pub fn can_nest_section(parent: SectionKind, child: SectionKind) -> bool {
    PolicyTable::default_table().can_nest_section(parent, child)
}

pub fn are_sibling_types(a: SectionKind, b: SectionKind, group: GroupId) -> bool {
    PolicyTable::default_table().are_sibling_types(a, b, group)
}

pub fn validate_drop(drag_item: &DragItem, drop_zone: Option<&DropZone>) -> Result<(), Rejection> {
    PolicyTable::default_table().validate_drop(drag_item, drop_zone)
}
