//! Group policy table: the single authority for what is structurally legal.
//!
//! Every rule reads from this table; none of them knows anything about a
//! particular group. Moving a kind into another group, or relaxing a route,
//! is an edit to the table (or to a policy TOML file) and nothing else.
//!
//! Tables are validated once when they are built. A table that names a group
//! twice, forgets one, or declares a fixed order over kinds the group cannot
//! hold never reaches the rules.

use crate::error::PolicyError;
use crate::vocab::{GroupId, SectionKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

/// Restrictions attached to one group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRestrictions {
    /// Source groups an item may come from to enter this group.
    #[serde(default)]
    pub can_receive_from: Vec<GroupId>,
    /// Outbound counterpart of `can_receive_from`.
    #[serde(default)]
    pub can_move_to: Vec<GroupId>,
    /// Kinds this group accepts. Empty means every kind that no other group
    /// claims explicitly.
    #[serde(default)]
    pub allowed_types: Vec<SectionKind>,
    /// Kinds whose relative order within the group is fixed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_order: Option<Vec<SectionKind>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl GroupRestrictions {
    /// A group that only exchanges items with itself.
    fn closed(group: GroupId, allowed_types: Vec<SectionKind>) -> Self {
        Self {
            can_receive_from: vec![group],
            can_move_to: vec![group],
            allowed_types,
            fixed_order: None,
            max_items: None,
        }
    }

    /// True when membership is defined negatively.
    pub fn is_dynamic(&self) -> bool {
        self.allowed_types.is_empty()
    }

    /// Position of `kind` in the fixed order, if the group has one and lists it.
    pub fn fixed_position(&self, kind: SectionKind) -> Option<usize> {
        self.fixed_order
            .as_ref()?
            .iter()
            .position(|ordered| *ordered == kind)
    }
}

/// Which kinds may host nested sections, and which kinds may never be nested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NestingPolicy {
    pub containers: Vec<SectionKind>,
    pub non_nestable: Vec<SectionKind>,
}

impl Default for NestingPolicy {
    fn default() -> Self {
        Self {
            containers: vec![SectionKind::ImageWithText, SectionKind::ProductGrid],
            non_nestable: vec![
                SectionKind::Header,
                SectionKind::Footer,
                SectionKind::AnnouncementBar,
                SectionKind::CartDrawer,
            ],
        }
    }
}

/// On-disk shape of a policy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolicyDocument {
    groups: BTreeMap<String, GroupRestrictions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nesting: Option<NestingPolicy>,
}

/// A complete, validated policy: one entry per group plus the nesting policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    header_group: GroupRestrictions,
    footer_group: GroupRestrictions,
    aside_group: GroupRestrictions,
    template: GroupRestrictions,
    nesting: NestingPolicy,
    exclusive: BTreeSet<SectionKind>,
}

static DEFAULT_TABLE: LazyLock<PolicyTable> = LazyLock::new(|| {
    PolicyTable::from_groups(default_groups(), NestingPolicy::default())
        .unwrap_or_else(|err| panic!("built-in placement policy is inconsistent: {err}"))
});

pub(crate) fn default_groups() -> BTreeMap<GroupId, GroupRestrictions> {
    let mut header = GroupRestrictions::closed(
        GroupId::HeaderGroup,
        vec![SectionKind::AnnouncementBar, SectionKind::Header],
    );
    header.fixed_order = Some(vec![SectionKind::AnnouncementBar, SectionKind::Header]);
    header.max_items = Some(2);

    let footer = GroupRestrictions::closed(GroupId::FooterGroup, vec![SectionKind::Footer]);

    let mut aside = GroupRestrictions::closed(
        GroupId::AsideGroup,
        vec![SectionKind::CartDrawer, SectionKind::SearchDrawer],
    );
    aside.max_items = Some(2);

    let template = GroupRestrictions::closed(GroupId::Template, Vec::new());

    BTreeMap::from([
        (GroupId::HeaderGroup, header),
        (GroupId::FooterGroup, footer),
        (GroupId::AsideGroup, aside),
        (GroupId::Template, template),
    ])
}

impl PolicyTable {
    /// The built-in storefront policy, validated on first use.
    pub fn default_table() -> &'static PolicyTable {
        &DEFAULT_TABLE
    }

    /// Build a table from per-group entries, checking completeness and consistency.
    pub fn from_groups(
        mut groups: BTreeMap<GroupId, GroupRestrictions>,
        nesting: NestingPolicy,
    ) -> Result<Self, PolicyError> {
        let mut take =
            |group: GroupId| groups.remove(&group).ok_or(PolicyError::MissingGroup(group));
        let header_group = take(GroupId::HeaderGroup)?;
        let footer_group = take(GroupId::FooterGroup)?;
        let aside_group = take(GroupId::AsideGroup)?;
        let template = take(GroupId::Template)?;

        let mut table = Self {
            header_group,
            footer_group,
            aside_group,
            template,
            nesting,
            exclusive: BTreeSet::new(),
        };
        table.exclusive = table
            .iter()
            .flat_map(|(_, restrictions)| restrictions.allowed_types.iter().copied())
            .collect();
        table.check_consistency()?;
        Ok(table)
    }

    /// Parse and validate a policy TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, PolicyError> {
        let document: PolicyDocument =
            toml::from_str(input).map_err(|err| PolicyError::Parse(err.to_string()))?;
        let mut groups = BTreeMap::new();
        for (key, restrictions) in document.groups {
            let group = key.parse::<GroupId>().map_err(PolicyError::Parse)?;
            if groups.insert(group, restrictions).is_some() {
                return Err(PolicyError::DuplicateGroup(group));
            }
        }
        Self::from_groups(groups, document.nesting.unwrap_or_default())
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, PolicyError> {
        let input = std::fs::read_to_string(path).map_err(|err| PolicyError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let table = Self::from_toml_str(&input)?;
        tracing::info!(path = %path.display(), "loaded placement policy");
        Ok(table)
    }

    /// Render in the format accepted by [`PolicyTable::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String, PolicyError> {
        let document = PolicyDocument {
            groups: self
                .iter()
                .map(|(group, restrictions)| (group.to_string(), restrictions.clone()))
                .collect(),
            nesting: Some(self.nesting.clone()),
        };
        toml::to_string_pretty(&document).map_err(|err| PolicyError::Render(err.to_string()))
    }

    /// Restrictions for `group`. Total over [`GroupId`].
    pub fn restrictions(&self, group: GroupId) -> &GroupRestrictions {
        match group {
            GroupId::HeaderGroup => &self.header_group,
            GroupId::FooterGroup => &self.footer_group,
            GroupId::AsideGroup => &self.aside_group,
            GroupId::Template => &self.template,
        }
    }

    pub fn nesting(&self) -> &NestingPolicy {
        &self.nesting
    }

    /// Kinds claimed explicitly by some group. The dynamic group never accepts them.
    pub fn exclusive_kinds(&self) -> &BTreeSet<SectionKind> {
        &self.exclusive
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &GroupRestrictions)> {
        GroupId::ALL
            .into_iter()
            .map(move |group| (group, self.restrictions(group)))
    }

    fn check_consistency(&self) -> Result<(), PolicyError> {
        let mut dynamic_group = None;

        for (group, restrictions) in self.iter() {
            if restrictions.max_items == Some(0) {
                return Err(PolicyError::ZeroMaxItems(group));
            }

            if restrictions.is_dynamic() {
                if let Some(first) = dynamic_group {
                    return Err(PolicyError::MultipleDynamicGroups {
                        first,
                        second: group,
                    });
                }
                dynamic_group = Some(group);
            }

            let mut seen = BTreeSet::new();
            for &kind in restrictions.fixed_order.iter().flatten() {
                if !seen.insert(kind) {
                    return Err(PolicyError::DuplicateFixedOrderKind { group, kind });
                }
                let accepted = if restrictions.is_dynamic() {
                    !self.exclusive.contains(&kind)
                } else {
                    restrictions.allowed_types.contains(&kind)
                };
                if !accepted {
                    return Err(PolicyError::FixedOrderKindNotAllowed { group, kind });
                }
            }

            for &target in &restrictions.can_move_to {
                if target != group && !self.restrictions(target).can_receive_from.contains(&group)
                {
                    return Err(PolicyError::AsymmetricRoute {
                        from: group,
                        to: target,
                        declared_by: group,
                        missing_on: target,
                    });
                }
            }
            for &source in &restrictions.can_receive_from {
                if source != group && !self.restrictions(source).can_move_to.contains(&group) {
                    return Err(PolicyError::AsymmetricRoute {
                        from: source,
                        to: group,
                        declared_by: group,
                        missing_on: source,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::default_table().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_exhaustive_and_consistent() {
        let table = PolicyTable::default_table();
        for group in GroupId::ALL {
            let restrictions = table.restrictions(group);
            assert_eq!(restrictions.can_move_to, vec![group]);
            assert_eq!(restrictions.can_receive_from, vec![group]);
        }
        assert!(table.restrictions(GroupId::Template).is_dynamic());
    }

    #[test]
    fn exclusive_kinds_are_the_structural_kinds() {
        let expected: BTreeSet<SectionKind> = [
            SectionKind::Header,
            SectionKind::AnnouncementBar,
            SectionKind::Footer,
            SectionKind::CartDrawer,
            SectionKind::SearchDrawer,
        ]
        .into_iter()
        .collect();
        assert_eq!(PolicyTable::default_table().exclusive_kinds(), &expected);
    }

    #[test]
    fn missing_group_is_rejected() {
        let mut groups = default_groups();
        groups.remove(&GroupId::AsideGroup);
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(err, PolicyError::MissingGroup(GroupId::AsideGroup)));
    }

    #[test]
    fn one_sided_route_is_rejected() {
        let mut groups = default_groups();
        groups
            .get_mut(&GroupId::HeaderGroup)
            .unwrap()
            .can_move_to
            .push(GroupId::Template);
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            PolicyError::AsymmetricRoute {
                from: GroupId::HeaderGroup,
                to: GroupId::Template,
                ..
            }
        ));
    }

    #[test]
    fn mirrored_route_is_accepted() {
        let mut groups = default_groups();
        groups
            .get_mut(&GroupId::HeaderGroup)
            .unwrap()
            .can_move_to
            .push(GroupId::FooterGroup);
        groups
            .get_mut(&GroupId::FooterGroup)
            .unwrap()
            .can_receive_from
            .push(GroupId::HeaderGroup);
        assert!(PolicyTable::from_groups(groups, NestingPolicy::default()).is_ok());
    }

    #[test]
    fn fixed_order_outside_allowed_types_is_rejected() {
        let mut groups = default_groups();
        groups.get_mut(&GroupId::FooterGroup).unwrap().fixed_order =
            Some(vec![SectionKind::Newsletter, SectionKind::Footer]);
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            PolicyError::FixedOrderKindNotAllowed {
                group: GroupId::FooterGroup,
                kind: SectionKind::Newsletter,
            }
        ));
    }

    #[test]
    fn dynamic_fixed_order_cannot_name_exclusive_kinds() {
        let mut groups = default_groups();
        groups.get_mut(&GroupId::Template).unwrap().fixed_order =
            Some(vec![SectionKind::Slideshow, SectionKind::Footer]);
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            PolicyError::FixedOrderKindNotAllowed {
                group: GroupId::Template,
                kind: SectionKind::Footer,
            }
        ));
    }

    #[test]
    fn duplicate_fixed_order_kind_is_rejected() {
        let mut groups = default_groups();
        groups.get_mut(&GroupId::HeaderGroup).unwrap().fixed_order = Some(vec![
            SectionKind::AnnouncementBar,
            SectionKind::Header,
            SectionKind::AnnouncementBar,
        ]);
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(err, PolicyError::DuplicateFixedOrderKind { .. }));
    }

    #[test]
    fn second_dynamic_group_is_rejected() {
        let mut groups = default_groups();
        groups.get_mut(&GroupId::FooterGroup).unwrap().allowed_types.clear();
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(err, PolicyError::MultipleDynamicGroups { .. }));
    }

    #[test]
    fn zero_max_items_is_rejected() {
        let mut groups = default_groups();
        groups.get_mut(&GroupId::AsideGroup).unwrap().max_items = Some(0);
        let err = PolicyTable::from_groups(groups, NestingPolicy::default()).unwrap_err();
        assert!(matches!(err, PolicyError::ZeroMaxItems(GroupId::AsideGroup)));
    }

    #[test]
    fn toml_round_trip_preserves_table() {
        let table = PolicyTable::default_table();
        let rendered = table.to_toml_string().unwrap();
        let parsed = PolicyTable::from_toml_str(&rendered).unwrap();
        assert_eq!(&parsed, table);
    }

    #[test]
    fn toml_without_nesting_uses_default_nesting() {
        let input = r#"
[groups.headerGroup]
canReceiveFrom = ["headerGroup"]
canMoveTo = ["headerGroup"]
allowedTypes = ["header"]

[groups.footerGroup]
canReceiveFrom = ["footerGroup"]
canMoveTo = ["footerGroup"]
allowedTypes = ["footer", "newsletter"]

[groups.asideGroup]
canReceiveFrom = ["asideGroup"]
canMoveTo = ["asideGroup"]
allowedTypes = ["cart-drawer"]

[groups.template]
canReceiveFrom = ["template"]
canMoveTo = ["template"]
"#;
        let table = PolicyTable::from_toml_str(input).unwrap();
        assert_eq!(table.nesting(), &NestingPolicy::default());
        assert!(table.exclusive_kinds().contains(&SectionKind::Newsletter));
        assert!(!table.exclusive_kinds().contains(&SectionKind::SearchDrawer));
    }

    #[test]
    fn group_spelled_twice_is_rejected() {
        let input = r#"
[groups.header-group]
canReceiveFrom = ["headerGroup"]
canMoveTo = ["headerGroup"]
allowedTypes = ["header", "newsletter"]

[groups.headerGroup]
canReceiveFrom = ["headerGroup"]
canMoveTo = ["headerGroup"]
allowedTypes = ["header"]
"#;
        let err = PolicyTable::from_toml_str(input).unwrap_err();
        assert!(matches!(err, PolicyError::DuplicateGroup(GroupId::HeaderGroup)));
    }

    #[test]
    fn unknown_group_key_is_a_parse_error() {
        let input = r#"
[groups.sidebar]
allowedTypes = ["header"]
"#;
        let err = PolicyTable::from_toml_str(input).unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }
}
