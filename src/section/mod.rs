//! Section editing model
//!
//! - `Section`: title, visibility and the two ordered link lists
//! - `SectionLink`: one link row and its field validation
//! - `reorder`: moving rows within and between the lists
//!
//! Validity is recomputed on demand from the current field values; nothing is
//! cached, so any field assignment is immediately reflected.

mod context;
mod field;
mod link;
mod model;
mod origin;
mod reorder;

pub use context::ValidationContext;
pub use field::{Field, FieldError};
pub use link::{DEFAULT_ICON, SectionLink, Segment, valid_external, valid_internal};
pub use model::{DeleteOutcome, Section};
pub use origin::Origin;
