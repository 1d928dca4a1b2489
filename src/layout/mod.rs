//! Field classification and section layout.
//!
//! - `rules` - ordered rule table mapping field keys to sections
//! - `section` - the fixed section catalog and its display order
//! - `labels` - display labels, with bilingual overrides for known fields
//! - `countries` - Arabic names for country answers
//! - `assembler` - builds the ordered `Layout` from a submission

pub mod assembler;
pub mod countries;
pub mod labels;
pub mod rules;
pub mod section;

pub use assembler::{assemble, display_value, FieldRow, Layout, SectionBlock};
pub use labels::{display_label, FieldLabel};
pub use rules::{classify, normalize_key, ClassificationRule, RULES};
pub use section::Section;
