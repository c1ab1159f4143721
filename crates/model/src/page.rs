//! Page entities and page types
//!
//! This module contains the `Page` content entity, the reusable `PageType`
//! schema, and the lightweight `ReferencePage` candidate used by
//! reference-kind attributes. Entities are supplied fully formed from
//! outside the editor; this crate never persists them.

use crate::attribute::{AttributeDefinition, AttributeInput};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use studio_core::{PageId, PageTypeId};

// ============================================================================
// Metadata
// ============================================================================

/// A single key/value metadata entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl MetadataEntry {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Which of the two metadata lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataKind {
    /// Visible to storefront API consumers
    Public,
    /// Visible to staff only
    Private,
}

// ============================================================================
// Page Type
// ============================================================================

/// A reusable schema defining which attributes a page exposes
///
/// A page's type is freely selectable while creating the page and locked
/// once the page has been created with one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageType {
    /// Unique identifier for this page type
    pub id: PageTypeId,
    /// Display name (e.g. "Landing page", "Help article")
    pub name: String,
    /// Attribute definitions pages of this type expose
    pub attributes: Vec<AttributeDefinition>,
}

impl PageType {
    /// Create a new page type with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Set the attribute definitions (builder style)
    pub fn with_attributes(mut self, attributes: Vec<AttributeDefinition>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Build empty attribute-input slots for this type's definitions
    pub fn attribute_inputs(&self) -> Vec<AttributeInput> {
        self.attributes
            .iter()
            .cloned()
            .map(AttributeInput::new)
            .collect()
    }
}

// ============================================================================
// Reference Page
// ============================================================================

/// A searchable candidate page usable as a reference-attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePage {
    pub id: PageId,
    pub title: String,
    pub slug: String,
}

impl ReferencePage {
    /// Create a new candidate
    pub fn new(id: PageId, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
        }
    }
}

// ============================================================================
// Page
// ============================================================================

/// A storefront content page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier for this page
    pub id: PageId,

    /// Page title
    pub title: String,

    /// URL slug (kebab-case, e.g. "about-us")
    pub slug: String,

    /// Page body content (plain text)
    pub content: String,

    /// Search engine title override
    pub seo_title: Option<String>,

    /// Search engine description override
    pub seo_description: Option<String>,

    /// Whether the page is currently published
    pub is_published: bool,

    /// Date the page becomes visible when scheduled
    pub publication_date: Option<NaiveDate>,

    /// The page type schema; locked once the page is created with one
    pub page_type: Option<PageType>,

    /// Ordered attribute-value assignments
    pub attributes: Vec<AttributeInput>,

    /// Public metadata entries
    pub metadata: Vec<MetadataEntry>,

    /// Private (staff-only) metadata entries
    pub private_metadata: Vec<MetadataEntry>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl Page {
    /// Create a new page with the given title and slug
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4(),
            title: title.into(),
            slug: slug.into(),
            content: String::new(),
            seo_title: None,
            seo_description: None,
            is_published: false,
            publication_date: None,
            page_type: None,
            attributes: Vec::new(),
            metadata: Vec::new(),
            private_metadata: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Set the page type and seed empty attribute slots from it (builder style)
    pub fn with_page_type(mut self, page_type: PageType) -> Self {
        self.attributes = page_type.attribute_inputs();
        self.page_type = Some(page_type);
        self
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// View this page as a reference-attribute candidate
    pub fn as_reference(&self) -> ReferencePage {
        ReferencePage::new(self.id, self.title.clone(), self.slug.clone())
    }
}

/// Whether the content-type picker is enabled for a page edit session
///
/// The type is freely selectable while creating a page and stays selectable
/// for an existing page that was somehow created without one; it locks as
/// soon as the page carries a type.
pub fn can_change_page_type(page: Option<&Page>) -> bool {
    match page {
        None => true,
        Some(page) => page.page_type.is_none(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_type_seeds_attribute_slots() {
        let page_type = PageType::new("Landing page").with_attributes(vec![
            AttributeDefinition::new("Season", "season", AttributeKind::Dropdown),
            AttributeDefinition::new("Related pages", "related-pages", AttributeKind::Reference),
        ]);

        let page = Page::new("Summer sale", "summer-sale").with_page_type(page_type.clone());

        assert_eq!(page.attributes.len(), 2);
        assert!(page.attributes.iter().all(|a| a.values.is_empty()));
        assert_eq!(page.attributes[0].definition.slug, "season");
        assert_eq!(page.page_type, Some(page_type));
    }

    #[test]
    fn test_can_change_page_type() {
        assert!(can_change_page_type(None));

        let untyped = Page::new("About", "about");
        assert!(can_change_page_type(Some(&untyped)));

        let typed = Page::new("About", "about").with_page_type(PageType::new("Default"));
        assert!(!can_change_page_type(Some(&typed)));
    }

    #[test]
    fn test_as_reference() {
        let page = Page::new("About Us", "about-us");
        let reference = page.as_reference();
        assert_eq!(reference.id, page.id);
        assert_eq!(reference.title, "About Us");
        assert_eq!(reference.slug, "about-us");
    }

    #[test]
    fn test_touch_advances_modified_at() {
        let mut page = Page::new("About", "about");
        let before = page.modified_at;
        page.touch();
        assert!(page.modified_at >= before);
    }

    #[test]
    fn test_page_roundtrips_through_json() {
        let page = Page::new("About", "about").with_page_type(
            PageType::new("Default").with_attributes(vec![AttributeDefinition::new(
                "Season",
                "season",
                AttributeKind::Dropdown,
            )]),
        );

        let json = serde_json::to_string(&page).unwrap();
        let restored: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, page);
    }
}
