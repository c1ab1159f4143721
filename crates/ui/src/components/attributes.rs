//! Attribute assignment card
//!
//! Renders one editor row per attribute slot, keyed by the definition's
//! input kind: dropdowns and multiselects edit choice values, file
//! attributes open the native file picker, and reference attributes show
//! the assigned pages as removable chips plus the assign button that hands
//! control to the assignment dialog upstream.

use crate::components::card::Card;
use crate::components::inputs::{Checkbox, Select, SelectOption};
use dioxus::prelude::*;
use studio_core::{AttributeId, PageId, PageValidationError, error_for_attribute};
use studio_model::{AttributeInput, AttributeKind, AttributeValue, ReferencePage};

/// Properties for Attributes component
#[derive(Props, Clone, PartialEq)]
pub struct AttributesProps {
    /// Attribute slots to edit, in page order
    pub attributes: Vec<AttributeInput>,

    /// Known reference candidates, used to resolve display titles
    #[props(default)]
    pub reference_pages: Vec<ReferencePage>,

    /// Whether inputs are disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Field-level errors, passed through for display
    #[props(default)]
    pub errors: Vec<PageValidationError>,

    /// Dropdown selection handler (attribute, choice)
    #[props(default)]
    pub on_change: EventHandler<(AttributeId, String)>,

    /// Multiselect toggle handler (attribute, choice)
    #[props(default)]
    pub on_multi_change: EventHandler<(AttributeId, String)>,

    /// File set/clear handler (attribute, name + url)
    #[props(default)]
    pub on_file_change: EventHandler<(AttributeId, Option<(String, String)>)>,

    /// Reference chip removal handler (attribute, page)
    #[props(default)]
    pub on_references_remove: EventHandler<(AttributeId, PageId)>,

    /// Assign-references button handler
    #[props(default)]
    pub on_references_add_click: EventHandler<AttributeId>,
}

/// Attribute assignment card
#[component]
pub fn Attributes(props: AttributesProps) -> Element {
    let on_change = props.on_change;
    let on_multi_change = props.on_multi_change;
    let on_file_change = props.on_file_change;
    let on_references_remove = props.on_references_remove;
    let on_references_add_click = props.on_references_add_click;

    rsx! {
        Card {
            title: "Attributes",

            for input in props.attributes.iter() {
                {
                    let id = input.id();
                    let error = error_for_attribute(&props.errors, id).map(|e| e.message.clone());
                    let kind = input.kind();
                    let input = input.clone();
                    let reference_pages = props.reference_pages.clone();
                    let disabled = props.disabled;

                    rsx! {
                        div {
                            key: "{id}",
                            class: "attribute-row",

                            match kind {
                                AttributeKind::Dropdown => rsx! {
                                    Select {
                                        value: input.values.first().and_then(|v| v.as_plain()).unwrap_or("").to_string(),
                                        options: choice_options(&input),
                                        label: input.definition.name.clone(),
                                        placeholder: "Select a value",
                                        disabled,
                                        error,
                                        on_change: move |choice| on_change.call((id, choice)),
                                    }
                                },
                                AttributeKind::Multiselect => rsx! {
                                    div {
                                        class: "field",
                                        label { class: "field-label", "{input.definition.name}" }
                                        div {
                                            class: "choice-list",
                                            for choice in input.definition.choices.iter() {
                                                Checkbox {
                                                    key: "{choice}",
                                                    checked: input.has_plain(choice),
                                                    label: choice.clone(),
                                                    disabled,
                                                    on_change: {
                                                        let choice = choice.clone();
                                                        move |_| on_multi_change.call((id, choice.clone()))
                                                    },
                                                }
                                            }
                                        }
                                        if let Some(error) = &error {
                                            p { class: "field-error", "{error}" }
                                        }
                                    }
                                },
                                AttributeKind::File => rsx! {
                                    FileAttribute {
                                        attribute: id,
                                        name: input.definition.name.clone(),
                                        value: current_file(&input),
                                        disabled,
                                        error,
                                        on_file_change,
                                    }
                                },
                                AttributeKind::Reference => rsx! {
                                    div {
                                        class: "field",
                                        label { class: "field-label", "{input.definition.name}" }
                                        div {
                                            class: "reference-chips",
                                            for page in input.reference_ids() {
                                                span {
                                                    key: "{page}",
                                                    class: "reference-chip",
                                                    "{reference_title(&reference_pages, page)}"
                                                    button {
                                                        class: "chip-remove",
                                                        r#type: "button",
                                                        disabled,
                                                        onclick: move |_| on_references_remove.call((id, page)),
                                                        "✕"
                                                    }
                                                }
                                            }
                                        }
                                        button {
                                            class: "btn btn-secondary",
                                            r#type: "button",
                                            disabled,
                                            onclick: move |_| on_references_add_click.call(id),
                                            "Assign references"
                                        }
                                        if let Some(error) = &error {
                                            p { class: "field-error", "{error}" }
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// File Attribute
// ============================================================================

/// Properties for the file attribute row
#[derive(Props, Clone, PartialEq)]
struct FileAttributeProps {
    attribute: AttributeId,
    name: String,
    value: Option<(String, String)>,
    disabled: bool,
    #[props(default)]
    error: Option<String>,
    on_file_change: EventHandler<(AttributeId, Option<(String, String)>)>,
}

/// File attribute row with native pick/clear actions
#[component]
fn FileAttribute(props: FileAttributeProps) -> Element {
    let attribute = props.attribute;
    let on_file_change = props.on_file_change;

    let handle_pick = move |_| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select file")
                .pick_file()
                .await;
            if let Some(file) = picked {
                let name = file.file_name();
                let url = format!("file://{}", file.path().display());
                on_file_change.call((attribute, Some((name, url))));
            }
        });
    };

    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{props.name}" }

            div {
                class: "file-attribute",

                if let Some((name, _url)) = &props.value {
                    span { class: "file-name", "{name}" }
                }

                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: props.disabled,
                    onclick: handle_pick,
                    "Choose file"
                }

                if props.value.is_some() {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: props.disabled,
                        onclick: move |_| on_file_change.call((attribute, None)),
                        "Clear"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build select options from a definition's choice list
fn choice_options(input: &AttributeInput) -> Vec<SelectOption> {
    input
        .definition
        .choices
        .iter()
        .map(|c| SelectOption::new(c.clone(), c.clone()))
        .collect()
}

/// The currently assigned file value, if any
fn current_file(input: &AttributeInput) -> Option<(String, String)> {
    input.values.iter().find_map(|v| match v {
        AttributeValue::File { name, url } => Some((name.clone(), url.clone())),
        _ => None,
    })
}

/// Resolve a reference chip title, falling back to a shortened id
fn reference_title(candidates: &[ReferencePage], page: PageId) -> String {
    candidates
        .iter()
        .find(|c| c.id == page)
        .map(|c| c.title.clone())
        .unwrap_or_else(|| {
            let id = page.to_string();
            format!("{}…", &id[..8])
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use studio_model::AttributeDefinition;

    #[test]
    fn test_choice_options() {
        let input = AttributeInput::new(
            AttributeDefinition::new("Season", "season", AttributeKind::Dropdown)
                .with_choices(vec!["winter".into(), "summer".into()]),
        );
        let options = choice_options(&input);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "winter");
    }

    #[test]
    fn test_current_file() {
        let mut input = AttributeInput::new(AttributeDefinition::new(
            "Banner",
            "banner",
            AttributeKind::File,
        ));
        assert_eq!(current_file(&input), None);

        input.set_values(vec![AttributeValue::File {
            name: "hero.png".into(),
            url: "file:///tmp/hero.png".into(),
        }]);
        assert_eq!(
            current_file(&input),
            Some(("hero.png".into(), "file:///tmp/hero.png".into()))
        );
    }

    #[test]
    fn test_reference_title_falls_back_to_short_id() {
        let page = uuid::Uuid::new_v4();
        let known = vec![ReferencePage::new(page, "About", "about")];
        assert_eq!(reference_title(&known, page), "About");

        let unknown = uuid::Uuid::new_v4();
        let title = reference_title(&known, unknown);
        assert!(title.ends_with('…'));
        assert!(unknown.to_string().starts_with(&title[..8]));
    }
}
