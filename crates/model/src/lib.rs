//! # Studio Model
//!
//! Domain model for Storefront Studio - pages, page types, attribute
//! assignments, and the edit-session form state.
//!
//! This crate provides:
//!
//! - **Pages**: the `Page` content entity, `PageType` schemas, and
//!   `ReferencePage` candidates
//! - **Attributes**: typed attribute definitions, value assignments, and the
//!   reference extract/merge utilities
//! - **Form state**: `PageDraft` and `PageFormState`, the provider owning
//!   editable draft state and change tracking for an edit session

pub mod attribute;
pub mod form;
pub mod page;

// Re-export commonly used items at crate root
pub use attribute::{
    AttributeDefinition, AttributeInput, AttributeKind, AttributeValue, merge_reference_values,
    reference_values_from_attributes,
};
pub use form::{PageDraft, PageFormState, ValidationContext, is_valid_slug};
pub use page::{
    MetadataEntry, MetadataKind, Page, PageType, ReferencePage, can_change_page_type,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
