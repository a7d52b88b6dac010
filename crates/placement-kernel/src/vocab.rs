//! Placement vocabulary: section kinds, page groups, and the transient
//! descriptors exchanged with the editor during a drag gesture.
//!
//! Both enumerations are closed. Anything outside them is rejected when it is
//! parsed, so the rules never see an unknown kind or group.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Semantic category of a section. Immutable once assigned to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Header,
    AnnouncementBar,
    Footer,
    CartDrawer,
    SearchDrawer,
    RichText,
    ImageWithText,
    ProductGrid,
    FeaturedCollection,
    ImageBanner,
    Slideshow,
    Newsletter,
    Testimonials,
    Faq,
    CustomHtml,
}

impl SectionKind {
    pub const ALL: [SectionKind; 15] = [
        Self::Header,
        Self::AnnouncementBar,
        Self::Footer,
        Self::CartDrawer,
        Self::SearchDrawer,
        Self::RichText,
        Self::ImageWithText,
        Self::ProductGrid,
        Self::FeaturedCollection,
        Self::ImageBanner,
        Self::Slideshow,
        Self::Newsletter,
        Self::Testimonials,
        Self::Faq,
        Self::CustomHtml,
    ];

    /// Wire tag, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::AnnouncementBar => "announcement-bar",
            Self::Footer => "footer",
            Self::CartDrawer => "cart-drawer",
            Self::SearchDrawer => "search-drawer",
            Self::RichText => "rich-text",
            Self::ImageWithText => "image-with-text",
            Self::ProductGrid => "product-grid",
            Self::FeaturedCollection => "featured-collection",
            Self::ImageBanner => "image-banner",
            Self::Slideshow => "slideshow",
            Self::Newsletter => "newsletter",
            Self::Testimonials => "testimonials",
            Self::Faq => "faq",
            Self::CustomHtml => "custom-html",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| format!("unknown section kind: {s}"))
    }
}

/// Structural region of a page. Regions never nest within each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupId {
    #[serde(rename = "headerGroup")]
    HeaderGroup,
    #[serde(rename = "footerGroup")]
    FooterGroup,
    #[serde(rename = "asideGroup")]
    AsideGroup,
    /// The main scrollable body.
    #[serde(rename = "template")]
    Template,
}

impl GroupId {
    pub const ALL: [GroupId; 4] = [
        Self::HeaderGroup,
        Self::FooterGroup,
        Self::AsideGroup,
        Self::Template,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeaderGroup => "headerGroup",
            Self::FooterGroup => "footerGroup",
            Self::AsideGroup => "asideGroup",
            Self::Template => "template",
        }
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "headerGroup" | "header-group" | "header_group" => Ok(Self::HeaderGroup),
            "footerGroup" | "footer-group" | "footer_group" => Ok(Self::FooterGroup),
            "asideGroup" | "aside-group" | "aside_group" => Ok(Self::AsideGroup),
            "template" => Ok(Self::Template),
            _ => Err(format!("unknown group: {s}")),
        }
    }
}

/// A composable block placed on a page.
///
/// Owned by the editor's page document. The placement rules only read
/// `kind` and `visible`; `settings` is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub settings: Value,
}

fn default_visible() -> bool {
    true
}

impl Section {
    /// A visible section with empty settings.
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            visible: true,
            settings: Value::Null,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A section in the middle of being relocated.
///
/// Lives for one drag gesture. `index` is stale as soon as the source list
/// changes, so callers rebuild it rather than keeping it around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    pub id: String,
    pub kind: SectionKind,
    pub group_id: GroupId,
    pub index: usize,
    pub section: Section,
}

impl DragItem {
    /// Describe `section`, currently at `index` within `group_id`.
    pub fn from_section(section: &Section, group_id: GroupId, index: usize) -> Self {
        Self {
            id: section.id.clone(),
            kind: section.kind,
            group_id,
            index,
            section: section.clone(),
        }
    }
}

/// A candidate destination under the pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DropZone {
    pub group_id: GroupId,
    pub index: usize,
    /// Kinds the zone advertises to the renderer. The group policy stays authoritative.
    #[serde(default)]
    pub accepts: Vec<SectionKind>,
    /// Overrides the group's `max_items` for this zone instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl DropZone {
    pub fn new(group_id: GroupId, index: usize) -> Self {
        Self {
            group_id,
            index,
            accepts: Vec::new(),
            max_items: None,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

/// Authoritative ordered section lists, as read from the page store.
pub type CurrentSections = BTreeMap<GroupId, Vec<Section>>;

/// Sections of `group`; a group absent from the snapshot is empty.
pub fn sections_in(current: &CurrentSections, group: GroupId) -> &[Section] {
    current.get(&group).map(Vec::as_slice).unwrap_or(&[])
}
