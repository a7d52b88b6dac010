//! # Placement Kernel
//!
//! Decides, for every candidate drag-and-drop move in the page builder,
//! whether a section may land at a given position and, if not, why.
//!
//! A page is split into four groups (header, footer, aside drawers and the
//! template body). Which kinds live where, which groups exchange items, and
//! which kinds keep a fixed relative order are all read from one
//! [`PolicyTable`]. Every check is a pure function of its inputs: the editor
//! passes the dragged item, the candidate zone and its latest section lists,
//! and gets back a [`ValidationResult`].
//!
//! ## Architecture
//!
//! ```text
//! vocab        ← SectionKind, GroupId, Section, DragItem, DropZone
//!     │
//! policy       ← GroupRestrictions per group, validated once
//!     │
//! rules        ← route, membership, fixed order, nesting, validate_drop
//!     │
//! validators   ← checks against current contents, batch, drop targets
//!     │
//! session      ← one drag gesture: begin → hover* → drop | cancel
//! ```

pub mod error;
pub mod policy;
pub mod result;
pub mod rules;
pub mod session;
pub mod validators;
pub mod vocab;

pub use error::{DragError, PolicyError};
pub use policy::{GroupRestrictions, NestingPolicy, PolicyTable};
pub use result::{Rejection, ValidationResult};
pub use rules::{
    are_sibling_types, can_group_receive_type, can_move_to_group, can_nest_section,
    validate_drop, validate_fixed_order,
};
pub use session::{DragOutcome, DragSession};
pub use validators::{
    ReorderOperation, can_swap_sections, get_valid_drop_zones, is_section_draggable,
    validate_batch_reorder, validate_drag_operation,
};
pub use vocab::{CurrentSections, DragItem, DropZone, GroupId, Section, SectionKind, sections_in};
