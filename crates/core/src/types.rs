//! Core types used throughout Storefront Studio
//!
//! This module contains the fundamental identifier aliases and the
//! field-level validation error objects shared between the model and the UI.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for page unique identifiers
pub type PageId = uuid::Uuid;

/// Type alias for page type unique identifiers
pub type PageTypeId = uuid::Uuid;

/// Type alias for attribute definition unique identifiers
pub type AttributeId = uuid::Uuid;

// ============================================================================
// Validation Errors
// ============================================================================

/// The page field a validation error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageField {
    Title,
    Slug,
    Content,
    SeoTitle,
    SeoDescription,
    IsPublished,
    PublicationDate,
    PageType,
    Attributes,
    Metadata,
}

impl PageField {
    /// Get the display name for this field
    pub fn display_name(&self) -> &'static str {
        match self {
            PageField::Title => "Title",
            PageField::Slug => "Slug",
            PageField::Content => "Content",
            PageField::SeoTitle => "Search engine title",
            PageField::SeoDescription => "Search engine description",
            PageField::IsPublished => "Visibility",
            PageField::PublicationDate => "Publication date",
            PageField::PageType => "Page type",
            PageField::Attributes => "Attributes",
            PageField::Metadata => "Metadata",
        }
    }
}

/// Machine-readable validation error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A required value is missing
    Required,
    /// The value has an invalid format
    Invalid,
    /// The value collides with an existing one
    NotUnique,
    /// A referenced object does not exist
    NotFound,
}

/// A field-level validation error for a page edit session
///
/// These are produced outside the details view (by the controller on submit)
/// and passed through unchanged to the sub-editor owning the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageValidationError {
    /// Field the error belongs to
    pub field: PageField,
    /// Error code
    pub code: ErrorCode,
    /// Attribute the error targets, for `PageField::Attributes` errors
    pub attribute: Option<AttributeId>,
    /// Human-readable message
    pub message: String,
}

impl PageValidationError {
    /// Create a new error for a plain page field
    pub fn new(field: PageField, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            attribute: None,
            message: message.into(),
        }
    }

    /// Create a new error targeting a specific attribute
    pub fn attribute(id: AttributeId, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: PageField::Attributes,
            code,
            attribute: Some(id),
            message: message.into(),
        }
    }

    /// Check whether this error targets the given field (ignoring attributes)
    pub fn is_for(&self, field: PageField) -> bool {
        self.field == field && self.attribute.is_none()
    }

    /// Check whether this error targets the given attribute
    pub fn is_for_attribute(&self, id: AttributeId) -> bool {
        self.attribute == Some(id)
    }
}

/// Find the first error for a field in an error list
pub fn error_for_field(
    errors: &[PageValidationError],
    field: PageField,
) -> Option<&PageValidationError> {
    errors.iter().find(|e| e.is_for(field))
}

/// Find the first error for an attribute in an error list
pub fn error_for_attribute(
    errors: &[PageValidationError],
    id: AttributeId,
) -> Option<&PageValidationError> {
    errors.iter().find(|e| e.is_for_attribute(id))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_for_field() {
        let errors = vec![
            PageValidationError::new(PageField::Title, ErrorCode::Required, "Title is required"),
            PageValidationError::new(PageField::Slug, ErrorCode::Invalid, "Invalid slug"),
        ];

        let err = error_for_field(&errors, PageField::Slug).unwrap();
        assert_eq!(err.code, ErrorCode::Invalid);
        assert!(error_for_field(&errors, PageField::SeoTitle).is_none());
    }

    #[test]
    fn test_attribute_errors_do_not_shadow_field_errors() {
        let attr = uuid::Uuid::new_v4();
        let errors = vec![PageValidationError::attribute(
            attr,
            ErrorCode::Required,
            "Value is required",
        )];

        assert!(error_for_field(&errors, PageField::Attributes).is_none());
        assert!(error_for_attribute(&errors, attr).is_some());
        assert!(error_for_attribute(&errors, uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_field_display_names() {
        assert_eq!(PageField::Title.display_name(), "Title");
        assert_eq!(PageField::SeoTitle.display_name(), "Search engine title");
    }
}
