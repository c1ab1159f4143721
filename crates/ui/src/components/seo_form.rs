//! Search engine preview card
//!
//! Edits the SEO title, SEO description, and URL slug. Placeholders fall
//! back to the page title so the preview reflects what a search engine
//! would show for an untouched page.

use crate::components::card::Card;
use crate::components::inputs::{TextArea, TextInput};
use dioxus::prelude::*;
use regex::Regex;
use std::sync::OnceLock;
use studio_core::{PageField, PageValidationError, error_for_field};

/// Properties for SeoForm component
#[derive(Props, Clone, PartialEq)]
pub struct SeoFormProps {
    /// Current SEO title value
    pub title: String,

    /// Current SEO description value
    pub description: String,

    /// Current slug value
    pub slug: String,

    /// Placeholder for the SEO title (usually the page title)
    #[props(default)]
    pub title_placeholder: Option<String>,

    /// Placeholder for the SEO description
    ///
    /// Deliberately left empty by the details page; no text is derived from
    /// the page content.
    #[props(default)]
    pub description_placeholder: Option<String>,

    /// Placeholder for the slug (usually the page title)
    #[props(default)]
    pub slug_placeholder: Option<String>,

    /// Helper text shown under the card title
    #[props(default)]
    pub helper_text: Option<String>,

    /// Whether an empty slug is acceptable (creation mode)
    #[props(default = false)]
    pub allow_empty_slug: bool,

    /// Whether inputs are disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Field-level errors, passed through for display
    #[props(default)]
    pub errors: Vec<PageValidationError>,

    /// SEO title change handler
    #[props(default)]
    pub on_title_change: EventHandler<String>,

    /// SEO description change handler
    #[props(default)]
    pub on_description_change: EventHandler<String>,

    /// Slug change handler
    #[props(default)]
    pub on_slug_change: EventHandler<String>,
}

/// Search engine preview card
#[component]
pub fn SeoForm(props: SeoFormProps) -> Element {
    let slug_error = error_for_field(&props.errors, PageField::Slug).map(|e| e.message.clone());
    let title_error =
        error_for_field(&props.errors, PageField::SeoTitle).map(|e| e.message.clone());
    let description_error =
        error_for_field(&props.errors, PageField::SeoDescription).map(|e| e.message.clone());

    let slug_help = if props.allow_empty_slug {
        "Leave empty to generate the slug from the title"
    } else {
        "Lowercase letters, digits, and hyphens"
    };

    rsx! {
        Card {
            title: "Search Engine Preview",

            if let Some(helper) = &props.helper_text {
                p { class: "card-helper", "{helper}" }
            }

            TextInput {
                value: props.title.clone(),
                label: "Search engine title",
                placeholder: props.title_placeholder.clone().unwrap_or_default(),
                disabled: props.disabled,
                error: title_error,
                on_change: move |value| props.on_title_change.call(value),
            }

            TextInput {
                value: props.slug.clone(),
                label: "Slug",
                placeholder: props.slug_placeholder.clone().map(|p| slugify(&p)).unwrap_or_default(),
                help_text: slug_help,
                disabled: props.disabled,
                error: slug_error,
                on_change: move |value| props.on_slug_change.call(value),
            }

            TextArea {
                value: props.description.clone(),
                label: "Search engine description",
                placeholder: props.description_placeholder.clone().unwrap_or_default(),
                rows: 3,
                disabled: props.disabled,
                error: description_error,
                on_change: move |value| props.on_description_change.call(value),
            }
        }
    }
}

// ============================================================================
// Slug Helpers
// ============================================================================

fn non_slug_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"))
}

/// Turn arbitrary text into a lowercase kebab-case slug
pub fn slugify(input: &str) -> String {
    non_slug_chars()
        .replace_all(&input.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("About Us"), "about-us");
        assert_eq!(slugify("Shipping & Returns"), "shipping-returns");
        assert_eq!(slugify("  FAQ  "), "faq");
        assert_eq!(slugify("Page 2"), "page-2");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_produces_valid_slugs() {
        for input in ["About Us", "Größen-Tabelle!", "--weird--input--", "2026"] {
            let slug = slugify(input);
            if !slug.is_empty() {
                assert!(studio_model::is_valid_slug(&slug), "bad slug: {slug:?}");
            }
        }
    }
}
