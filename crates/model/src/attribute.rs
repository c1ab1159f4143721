//! Attribute definitions and value assignments
//!
//! A [`PageType`](crate::page::PageType) declares a set of
//! [`AttributeDefinition`]s; a page carries one [`AttributeInput`] slot per
//! definition, holding the currently assigned values. Reference-kind
//! attributes hold identifiers of other pages, resolved through the
//! assignment dialog.

use crate::page::ReferencePage;
use serde::{Deserialize, Serialize};
use studio_core::{AttributeId, PageId};

// ============================================================================
// Definitions
// ============================================================================

/// The input widget an attribute is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Single choice from a fixed list
    Dropdown,
    /// Multiple choices from a fixed list
    Multiselect,
    /// An uploaded file (name + url)
    File,
    /// References to other pages
    Reference,
}

impl AttributeKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeKind::Dropdown => "Dropdown",
            AttributeKind::Multiselect => "Multiple select",
            AttributeKind::File => "File",
            AttributeKind::Reference => "Page reference",
        }
    }

    /// Whether values of this kind come from the definition's choice list
    pub fn uses_choices(&self) -> bool {
        matches!(self, AttributeKind::Dropdown | AttributeKind::Multiselect)
    }
}

/// Schema-level definition of a single attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Unique identifier for this definition
    pub id: AttributeId,
    /// Display name (e.g. "Season", "Related pages")
    pub name: String,
    /// URL-safe identifier (e.g. "season")
    pub slug: String,
    /// Input kind
    pub kind: AttributeKind,
    /// Available choices for dropdown/multiselect kinds
    pub choices: Vec<String>,
    /// Whether at least one value must be assigned
    pub value_required: bool,
}

impl AttributeDefinition {
    /// Create a new definition with the given name and kind
    pub fn new(name: impl Into<String>, slug: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            kind,
            choices: Vec::new(),
            value_required: false,
        }
    }

    /// Set the choice list (builder style)
    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    /// Mark the attribute as required (builder style)
    pub fn required(mut self) -> Self {
        self.value_required = true;
        self
    }
}

// ============================================================================
// Values
// ============================================================================

/// A single assigned attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A plain choice value (dropdown/multiselect)
    Plain(String),
    /// An uploaded file
    File { name: String, url: String },
    /// A reference to another page
    Reference(PageId),
}

impl AttributeValue {
    /// Get the referenced page id, if this is a reference value
    pub fn as_reference(&self) -> Option<PageId> {
        match self {
            AttributeValue::Reference(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the plain choice string, if this is a plain value
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            AttributeValue::Plain(v) => Some(v),
            _ => None,
        }
    }
}

/// A value-assignment slot bound to an attribute definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeInput {
    /// The definition this slot is bound to
    pub definition: AttributeDefinition,
    /// Currently assigned values, ordered and deduplicated
    pub values: Vec<AttributeValue>,
}

impl AttributeInput {
    /// Create an empty slot for a definition
    pub fn new(definition: AttributeDefinition) -> Self {
        Self {
            definition,
            values: Vec::new(),
        }
    }

    /// Create a slot with initial values (deduplicated, order preserved)
    pub fn with_values(definition: AttributeDefinition, values: Vec<AttributeValue>) -> Self {
        let mut input = Self::new(definition);
        input.set_values(values);
        input
    }

    /// The definition id this slot is bound to
    pub fn id(&self) -> AttributeId {
        self.definition.id
    }

    /// The input kind of the bound definition
    pub fn kind(&self) -> AttributeKind {
        self.definition.kind
    }

    /// Replace all values, deduplicating while preserving first occurrence
    pub fn set_values(&mut self, values: Vec<AttributeValue>) {
        self.values = dedupe_values(values);
    }

    /// Check whether a plain choice is currently selected
    pub fn has_plain(&self, choice: &str) -> bool {
        self.values.iter().any(|v| v.as_plain() == Some(choice))
    }

    /// The referenced page ids currently assigned, in order
    pub fn reference_ids(&self) -> Vec<PageId> {
        self.values.iter().filter_map(|v| v.as_reference()).collect()
    }
}

/// Deduplicate a value list, keeping the first occurrence of each value
fn dedupe_values(values: Vec<AttributeValue>) -> Vec<AttributeValue> {
    let mut out: Vec<AttributeValue> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

// ============================================================================
// Reference Utilities
// ============================================================================

/// Extract the reference pages currently assigned to an attribute
///
/// Returns, in assignment order, the subset of the attribute's reference
/// values that match a known candidate. Values pointing at unknown pages are
/// skipped rather than surfaced as errors.
pub fn reference_values_from_attributes(
    attribute: AttributeId,
    attributes: &[AttributeInput],
    candidates: &[ReferencePage],
) -> Vec<ReferencePage> {
    let Some(input) = attributes.iter().find(|a| a.id() == attribute) else {
        return Vec::new();
    };

    input
        .reference_ids()
        .into_iter()
        .filter_map(|id| candidates.iter().find(|c| c.id == id).cloned())
        .collect()
}

/// Merge newly selected reference values into an attribute's value list
///
/// Already assigned values keep their order; selected pages not yet assigned
/// are appended. The result is deduplicated, which makes the merge
/// idempotent: merging the same selection twice yields the same list.
pub fn merge_reference_values(
    attribute: AttributeId,
    selected: &[PageId],
    attributes: &[AttributeInput],
) -> Vec<AttributeValue> {
    let existing = attributes
        .iter()
        .find(|a| a.id() == attribute)
        .map(|a| a.values.clone())
        .unwrap_or_default();

    let mut merged = dedupe_values(existing);
    for id in selected {
        let value = AttributeValue::Reference(*id);
        if !merged.contains(&value) {
            merged.push(value);
        }
    }
    merged
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reference_input(ids: &[PageId]) -> AttributeInput {
        AttributeInput::with_values(
            AttributeDefinition::new("Related pages", "related-pages", AttributeKind::Reference),
            ids.iter().map(|id| AttributeValue::Reference(*id)).collect(),
        )
    }

    #[test]
    fn test_set_values_dedupes_preserving_order() {
        let def = AttributeDefinition::new("Season", "season", AttributeKind::Multiselect);
        let input = AttributeInput::with_values(
            def,
            vec![
                AttributeValue::Plain("winter".into()),
                AttributeValue::Plain("summer".into()),
                AttributeValue::Plain("winter".into()),
            ],
        );

        assert_eq!(
            input.values,
            vec![
                AttributeValue::Plain("winter".into()),
                AttributeValue::Plain("summer".into()),
            ]
        );
    }

    #[test]
    fn test_merge_appends_new_values() {
        let p1 = uuid::Uuid::new_v4();
        let p2 = uuid::Uuid::new_v4();
        let p3 = uuid::Uuid::new_v4();
        let input = reference_input(&[p1, p2]);
        let attribute = input.id();

        let merged = merge_reference_values(attribute, &[p2, p3], &[input]);

        assert_eq!(
            merged,
            vec![
                AttributeValue::Reference(p1),
                AttributeValue::Reference(p2),
                AttributeValue::Reference(p3),
            ]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let p1 = uuid::Uuid::new_v4();
        let p2 = uuid::Uuid::new_v4();
        let mut input = reference_input(&[p1]);
        let attribute = input.id();

        let once = merge_reference_values(attribute, &[p2], &[input.clone()]);
        input.set_values(once.clone());
        let twice = merge_reference_values(attribute, &[p2], &[input]);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_unknown_attribute_keeps_selection() {
        let p1 = uuid::Uuid::new_v4();
        let merged = merge_reference_values(uuid::Uuid::new_v4(), &[p1, p1], &[]);
        assert_eq!(merged, vec![AttributeValue::Reference(p1)]);
    }

    #[test]
    fn test_reference_values_restricted_to_candidates() {
        let p1 = uuid::Uuid::new_v4();
        let p2 = uuid::Uuid::new_v4();
        let unknown = uuid::Uuid::new_v4();
        let input = reference_input(&[p2, unknown, p1]);
        let attribute = input.id();

        let candidates = vec![
            ReferencePage::new(p1, "First", "first"),
            ReferencePage::new(p2, "Second", "second"),
        ];

        let values = reference_values_from_attributes(attribute, &[input], &candidates);
        let titles: Vec<&str> = values.iter().map(|v| v.title.as_str()).collect();

        // Assignment order wins, unknown ids are dropped
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_reference_values_for_missing_attribute() {
        let values = reference_values_from_attributes(uuid::Uuid::new_v4(), &[], &[]);
        assert!(values.is_empty());
    }

    #[test]
    fn test_kind_uses_choices() {
        assert!(AttributeKind::Dropdown.uses_choices());
        assert!(AttributeKind::Multiselect.uses_choices());
        assert!(!AttributeKind::File.uses_choices());
        assert!(!AttributeKind::Reference.uses_choices());
    }
}
