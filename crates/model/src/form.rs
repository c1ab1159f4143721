//! Form-state provider for the page edit session
//!
//! [`PageDraft`] holds the editable field values of the current session;
//! [`PageFormState`] pairs the draft with the snapshot it was seeded from and
//! exposes the named mutators the view wires to its inputs. Change tracking
//! (`has_changed`) is snapshot equality, so reverting an edit by hand also
//! re-disables the save bar.
//!
//! The provider never performs network or storage work: submission hands a
//! draft clone to whoever owns the session.

use crate::attribute::{AttributeInput, AttributeValue};
use crate::page::{MetadataEntry, MetadataKind, Page, PageType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studio_core::{
    AttributeId, ErrorCode, PageField, PageValidationError, Validatable,
};

// ============================================================================
// Draft
// ============================================================================

/// The editable field values of a page edit session
///
/// SEO fields are plain strings here (empty means unset) because that is what
/// the inputs edit; [`PageDraft::seo_title_opt`] and friends produce the
/// optional form for submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub seo_title: String,
    pub seo_description: String,
    pub is_published: bool,
    pub publication_date: Option<NaiveDate>,
    pub page_type: Option<PageType>,
    pub attributes: Vec<AttributeInput>,
    pub metadata: Vec<MetadataEntry>,
    pub private_metadata: Vec<MetadataEntry>,
}

impl PageDraft {
    /// Seed a draft from an existing page
    pub fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.clone(),
            content: page.content.clone(),
            seo_title: page.seo_title.clone().unwrap_or_default(),
            seo_description: page.seo_description.clone().unwrap_or_default(),
            is_published: page.is_published,
            publication_date: page.publication_date,
            page_type: page.page_type.clone(),
            attributes: page.attributes.clone(),
            metadata: page.metadata.clone(),
            private_metadata: page.private_metadata.clone(),
        }
    }

    /// SEO title as an optional value (trimmed, empty means unset)
    pub fn seo_title_opt(&self) -> Option<String> {
        trimmed_opt(&self.seo_title)
    }

    /// SEO description as an optional value (trimmed, empty means unset)
    pub fn seo_description_opt(&self) -> Option<String> {
        trimmed_opt(&self.seo_description)
    }

    /// Mutable access to one of the two metadata lists
    fn metadata_mut(&mut self, kind: MetadataKind) -> &mut Vec<MetadataEntry> {
        match kind {
            MetadataKind::Public => &mut self.metadata,
            MetadataKind::Private => &mut self.private_metadata,
        }
    }
}

fn trimmed_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check if a string is a valid page slug (lowercase kebab-case)
pub fn is_valid_slug(s: &str) -> bool {
    if s.is_empty() || s.starts_with('-') || s.ends_with('-') || s.contains("--") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ============================================================================
// Validation
// ============================================================================

/// Context for draft validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext {
    /// Whether an empty slug is acceptable (creation mode)
    pub allow_empty_slug: bool,
}

impl Validatable for PageDraft {
    type Context = ValidationContext;

    fn validate(&self, ctx: &ValidationContext) -> Vec<PageValidationError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(PageValidationError::new(
                PageField::Title,
                ErrorCode::Required,
                "Title is required",
            ));
        }

        if self.slug.is_empty() {
            if !ctx.allow_empty_slug {
                errors.push(PageValidationError::new(
                    PageField::Slug,
                    ErrorCode::Required,
                    "Slug is required",
                ));
            }
        } else if !is_valid_slug(&self.slug) {
            errors.push(PageValidationError::new(
                PageField::Slug,
                ErrorCode::Invalid,
                "Slug must be lowercase letters, digits, and single hyphens",
            ));
        }

        for input in &self.attributes {
            if input.definition.value_required && input.values.is_empty() {
                errors.push(PageValidationError::attribute(
                    input.id(),
                    ErrorCode::Required,
                    format!("{} requires a value", input.definition.name),
                ));
            }
        }

        errors
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Owner of the mutable draft state for one edit session
///
/// The view holds this behind a signal and calls the named mutators from its
/// input handlers; each mutator updates the draft synchronously before
/// returning, so field updates never race.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFormState {
    initial: PageDraft,
    draft: PageDraft,
}

impl PageFormState {
    /// Seed form state from an optional page (None starts a creation session)
    pub fn new(page: Option<&Page>) -> Self {
        let draft = page.map(PageDraft::from_page).unwrap_or_default();
        Self {
            initial: draft.clone(),
            draft,
        }
    }

    /// The current draft
    pub fn draft(&self) -> &PageDraft {
        &self.draft
    }

    /// Whether any field differs from the seeded snapshot
    pub fn has_changed(&self) -> bool {
        self.draft != self.initial
    }

    /// Re-seed both snapshot and draft (after a successful save)
    pub fn reset_to(&mut self, page: Option<&Page>) {
        *self = Self::new(page);
    }

    /// A draft clone for submission
    pub fn submit_data(&self) -> PageDraft {
        self.draft.clone()
    }

    // ------------------------------------------------------------------
    // Field mutators
    // ------------------------------------------------------------------

    pub fn change_title(&mut self, value: String) {
        self.draft.title = value;
    }

    pub fn change_slug(&mut self, value: String) {
        self.draft.slug = value;
    }

    pub fn change_content(&mut self, value: String) {
        self.draft.content = value;
    }

    pub fn change_seo_title(&mut self, value: String) {
        self.draft.seo_title = value;
    }

    pub fn change_seo_description(&mut self, value: String) {
        self.draft.seo_description = value;
    }

    pub fn change_is_published(&mut self, value: bool) {
        self.draft.is_published = value;
    }

    pub fn change_publication_date(&mut self, value: Option<NaiveDate>) {
        self.draft.publication_date = value;
    }

    /// Select the page type and reseed attribute slots from its definitions
    ///
    /// Values of attributes present on both the old and the new type are
    /// carried over; slots for definitions the new type does not declare are
    /// dropped.
    pub fn select_page_type(&mut self, page_type: PageType) {
        let previous = std::mem::take(&mut self.draft.attributes);
        self.draft.attributes = page_type
            .attributes
            .iter()
            .map(|definition| {
                let carried = previous
                    .iter()
                    .find(|input| input.id() == definition.id)
                    .map(|input| input.values.clone())
                    .unwrap_or_default();
                AttributeInput::with_values(definition.clone(), carried)
            })
            .collect();
        self.draft.page_type = Some(page_type);
    }

    // ------------------------------------------------------------------
    // Attribute mutators
    // ------------------------------------------------------------------

    /// Replace a dropdown attribute's value with a single choice
    pub fn select_attribute(&mut self, attribute: AttributeId, choice: String) {
        if let Some(input) = self.attribute_mut(attribute) {
            input.set_values(vec![AttributeValue::Plain(choice)]);
        }
    }

    /// Toggle a multiselect choice on or off
    pub fn select_attribute_multi(&mut self, attribute: AttributeId, choice: String) {
        if let Some(input) = self.attribute_mut(attribute) {
            if input.has_plain(&choice) {
                input
                    .values
                    .retain(|v| v.as_plain() != Some(choice.as_str()));
            } else {
                input.values.push(AttributeValue::Plain(choice));
            }
        }
    }

    /// Set or clear a file attribute's value
    pub fn select_attribute_file(&mut self, attribute: AttributeId, file: Option<(String, String)>) {
        if let Some(input) = self.attribute_mut(attribute) {
            match file {
                Some((name, url)) => input.set_values(vec![AttributeValue::File { name, url }]),
                None => input.values.clear(),
            }
        }
    }

    /// Replace a reference attribute's value list (typically a merge result)
    pub fn select_attribute_references(
        &mut self,
        attribute: AttributeId,
        values: Vec<AttributeValue>,
    ) {
        if let Some(input) = self.attribute_mut(attribute) {
            input.set_values(values);
        }
    }

    /// Remove a single referenced page from a reference attribute
    pub fn remove_attribute_reference(&mut self, attribute: AttributeId, page: studio_core::PageId) {
        if let Some(input) = self.attribute_mut(attribute) {
            input.values.retain(|v| v.as_reference() != Some(page));
        }
    }

    fn attribute_mut(&mut self, attribute: AttributeId) -> Option<&mut AttributeInput> {
        self.draft
            .attributes
            .iter_mut()
            .find(|input| input.id() == attribute)
    }

    // ------------------------------------------------------------------
    // Metadata mutators
    // ------------------------------------------------------------------

    /// Append an empty metadata row
    pub fn add_metadata(&mut self, kind: MetadataKind) {
        self.draft.metadata_mut(kind).push(MetadataEntry::default());
    }

    /// Update a metadata row in place
    pub fn update_metadata(&mut self, kind: MetadataKind, index: usize, key: String, value: String) {
        let entries = self.draft.metadata_mut(kind);
        if let Some(entry) = entries.get_mut(index) {
            entry.key = key;
            entry.value = value;
        }
    }

    /// Remove a metadata row
    pub fn remove_metadata(&mut self, kind: MetadataKind, index: usize) {
        let entries = self.draft.metadata_mut(kind);
        if index < entries.len() {
            entries.remove(index);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeDefinition, AttributeKind};
    use pretty_assertions::assert_eq;

    fn typed_page() -> Page {
        Page::new("About Us", "about-us").with_page_type(
            PageType::new("Default").with_attributes(vec![
                AttributeDefinition::new("Season", "season", AttributeKind::Dropdown)
                    .with_choices(vec!["winter".into(), "summer".into()]),
                AttributeDefinition::new(
                    "Related pages",
                    "related-pages",
                    AttributeKind::Reference,
                ),
            ]),
        )
    }

    #[test]
    fn test_new_form_has_not_changed() {
        let page = typed_page();
        let form = PageFormState::new(Some(&page));
        assert!(!form.has_changed());

        let creating = PageFormState::new(None);
        assert!(!creating.has_changed());
    }

    #[test]
    fn test_change_tracking_and_manual_revert() {
        let page = typed_page();
        let mut form = PageFormState::new(Some(&page));

        form.change_title("About".into());
        assert!(form.has_changed());

        form.change_title("About Us".into());
        assert!(!form.has_changed());
    }

    #[test]
    fn test_reset_after_save() {
        let page = typed_page();
        let mut form = PageFormState::new(Some(&page));
        form.change_slug("about".into());
        assert!(form.has_changed());

        form.reset_to(Some(&page));
        assert!(!form.has_changed());
        assert_eq!(form.draft().slug, "about-us");
    }

    #[test]
    fn test_select_attribute_replaces_value() {
        let page = typed_page();
        let season = page.attributes[0].id();
        let mut form = PageFormState::new(Some(&page));

        form.select_attribute(season, "winter".into());
        form.select_attribute(season, "summer".into());

        assert_eq!(
            form.draft().attributes[0].values,
            vec![AttributeValue::Plain("summer".into())]
        );
    }

    #[test]
    fn test_multi_select_toggles() {
        let page = typed_page();
        let season = page.attributes[0].id();
        let mut form = PageFormState::new(Some(&page));

        form.select_attribute_multi(season, "winter".into());
        form.select_attribute_multi(season, "summer".into());
        form.select_attribute_multi(season, "winter".into());

        assert_eq!(
            form.draft().attributes[0].values,
            vec![AttributeValue::Plain("summer".into())]
        );
    }

    #[test]
    fn test_reference_remove() {
        let page = typed_page();
        let related = page.attributes[1].id();
        let p1 = uuid::Uuid::new_v4();
        let p2 = uuid::Uuid::new_v4();
        let mut form = PageFormState::new(Some(&page));

        form.select_attribute_references(
            related,
            vec![AttributeValue::Reference(p1), AttributeValue::Reference(p2)],
        );
        form.remove_attribute_reference(related, p1);

        assert_eq!(
            form.draft().attributes[1].values,
            vec![AttributeValue::Reference(p2)]
        );
    }

    #[test]
    fn test_select_page_type_carries_shared_attributes() {
        let shared = AttributeDefinition::new("Season", "season", AttributeKind::Dropdown);
        let old_type = PageType::new("Old").with_attributes(vec![
            shared.clone(),
            AttributeDefinition::new("Banner", "banner", AttributeKind::File),
        ]);
        let new_type = PageType::new("New").with_attributes(vec![
            shared.clone(),
            AttributeDefinition::new("Related", "related", AttributeKind::Reference),
        ]);

        let mut form = PageFormState::new(None);
        form.select_page_type(old_type);
        form.select_attribute(shared.id, "winter".into());

        form.select_page_type(new_type.clone());

        let draft = form.draft();
        assert_eq!(draft.page_type.as_ref().map(|t| t.name.as_str()), Some("New"));
        assert_eq!(draft.attributes.len(), 2);
        assert_eq!(
            draft.attributes[0].values,
            vec![AttributeValue::Plain("winter".into())]
        );
        assert!(draft.attributes[1].values.is_empty());
    }

    #[test]
    fn test_metadata_mutators() {
        let mut form = PageFormState::new(None);

        form.add_metadata(MetadataKind::Public);
        form.update_metadata(MetadataKind::Public, 0, "color".into(), "blue".into());
        form.add_metadata(MetadataKind::Private);
        form.update_metadata(MetadataKind::Private, 0, "note".into(), "internal".into());

        assert_eq!(form.draft().metadata, vec![MetadataEntry::new("color", "blue")]);
        assert_eq!(
            form.draft().private_metadata,
            vec![MetadataEntry::new("note", "internal")]
        );

        form.remove_metadata(MetadataKind::Public, 0);
        assert!(form.draft().metadata.is_empty());
        // Out-of-range removal is a no-op
        form.remove_metadata(MetadataKind::Public, 5);
    }

    #[test]
    fn test_validation_title_and_slug() {
        let draft = PageDraft::default();

        let creating = ValidationContext {
            allow_empty_slug: true,
        };
        let editing = ValidationContext {
            allow_empty_slug: false,
        };

        let errors = draft.validate(&creating);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, PageField::Title);

        let errors = draft.validate(&editing);
        assert!(errors.iter().any(|e| e.is_for(PageField::Slug)));

        let mut draft = draft;
        draft.title = "About".into();
        draft.slug = "Not A Slug".into();
        let errors = draft.validate(&editing);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::Invalid);
    }

    #[test]
    fn test_validation_required_attribute() {
        let required =
            AttributeDefinition::new("Season", "season", AttributeKind::Dropdown).required();
        let attribute = required.id;
        let mut form = PageFormState::new(None);
        form.select_page_type(PageType::new("Typed").with_attributes(vec![required]));
        form.change_title("About".into());

        let ctx = ValidationContext {
            allow_empty_slug: true,
        };
        let errors = form.draft().validate(&ctx);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_for_attribute(attribute));

        form.select_attribute(attribute, "winter".into());
        assert!(form.draft().is_valid(&ctx));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("about-us"));
        assert!(is_valid_slug("page-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("About"));
        assert!(!is_valid_slug("-about"));
        assert!(!is_valid_slug("about-"));
        assert!(!is_valid_slug("about--us"));
        assert!(!is_valid_slug("about us"));
    }

    #[test]
    fn test_seo_opts_trim_empty_to_none() {
        let mut draft = PageDraft::default();
        assert_eq!(draft.seo_title_opt(), None);

        draft.seo_title = "  About Us  ".into();
        draft.seo_description = "   ".into();
        assert_eq!(draft.seo_title_opt(), Some("About Us".to_string()));
        assert_eq!(draft.seo_description_opt(), None);
    }
}
