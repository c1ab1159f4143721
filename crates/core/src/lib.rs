//! # Studio Core
//!
//! Core types, traits, and error handling for Storefront Studio.
//!
//! This crate provides the foundational building blocks used throughout
//! the Storefront Studio workspace, including:
//!
//! - **Types**: Identifier aliases and field-level validation error objects
//! - **Traits**: Common behaviors like `Validatable`
//! - **Errors**: Unified error handling with `StudioError` and `StudioResult`

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{StudioError, StudioResult};
pub use traits::Validatable;
pub use types::{
    AttributeId, ErrorCode, PageField, PageId, PageTypeId, PageValidationError,
    error_for_attribute, error_for_field,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
