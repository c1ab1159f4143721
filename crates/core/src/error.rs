//! Error types for Storefront Studio
//!
//! This module provides unified error handling across the workspace,
//! covering validation failures, missing entities, and serialization.

use crate::types::{AttributeId, PageId, PageTypeId};
use thiserror::Error;

/// The main error type for Storefront Studio
#[derive(Debug, Error)]
pub enum StudioError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Page validation failed
    #[error("Page validation failed for '{page}': {message}")]
    PageValidation { page: String, message: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Page not found
    #[error("Page not found: {0}")]
    PageNotFound(PageId),

    /// Page type not found
    #[error("Page type not found: {0}")]
    PageTypeNotFound(PageTypeId),

    /// Attribute not found on the edited page
    #[error("Attribute not found: {0}")]
    AttributeNotFound(AttributeId),

    // ========================================================================
    // Duplicate Errors
    // ========================================================================
    /// Duplicate page slug
    #[error("Duplicate slug: '{0}' is already in use")]
    DuplicateSlug(String),

    // ========================================================================
    // State Errors
    // ========================================================================
    /// The page type is locked and cannot be changed
    #[error("Page type is locked for page '{0}'")]
    PageTypeLocked(String),

    /// UI state error
    #[error("UI state error: {0}")]
    UiState(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,
}

impl StudioError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        StudioError::Validation(msg.into())
    }

    /// Create a page validation error
    pub fn page_validation(page: impl Into<String>, msg: impl Into<String>) -> Self {
        StudioError::PageValidation {
            page: page.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        StudioError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StudioError::Validation(_)
                | StudioError::PageValidation { .. }
                | StudioError::DuplicateSlug(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StudioError::PageNotFound(_)
                | StudioError::PageTypeNotFound(_)
                | StudioError::AttributeNotFound(_)
        )
    }
}

/// Result type alias using StudioError
pub type StudioResult<T> = Result<T, StudioError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = StudioError::validation("Title is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Title is required");
    }

    #[test]
    fn test_page_validation_error() {
        let err = StudioError::page_validation("About Us", "Slug must be kebab-case");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Page validation failed for 'About Us': Slug must be kebab-case"
        );
    }

    #[test]
    fn test_not_found_errors() {
        let id = uuid::Uuid::new_v4();
        let err = StudioError::PageNotFound(id);
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), format!("Page not found: {}", id));
    }

    #[test]
    fn test_duplicate_slug() {
        let err = StudioError::DuplicateSlug("about-us".to_string());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Duplicate slug: 'about-us' is already in use"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StudioError = json_err.into();
        assert!(matches!(err, StudioError::JsonSerialization(_)));
    }
}
