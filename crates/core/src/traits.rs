//! Common traits for Storefront Studio
//!
//! The only trait shared across the workspace today is [`Validatable`],
//! implemented by editable drafts whose errors are surfaced field by field.

use crate::types::PageValidationError;

/// A value that can be validated into a list of field-level errors
///
/// Validation is parameterised by a context describing the edit session
/// (for example whether an empty slug is acceptable while creating a page).
pub trait Validatable {
    /// Context passed to validation
    type Context;

    /// Validate and return all errors found (empty when valid)
    fn validate(&self, ctx: &Self::Context) -> Vec<PageValidationError>;

    /// Check if the value is valid in the given context
    fn is_valid(&self, ctx: &Self::Context) -> bool {
        self.validate(ctx).is_empty()
    }
}
