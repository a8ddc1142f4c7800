//! Document projection: pure conversions from the extracted-field shape into
//! the canonical resume text and the editor's document model.

pub mod canonical;
pub mod editable;
pub mod handlers;
pub mod sample;
pub mod share;

pub use canonical::to_canonical_text;
pub use editable::to_editable_document;
