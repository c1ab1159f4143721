//! Organization card
//!
//! Assigns the page's content type. The type can only be chosen while the
//! page is new and no type has been picked yet; afterwards the assigned
//! type is shown read-only. The picker searches the catalog through the
//! caller and pages through results with a load-more button.

use crate::components::card::Card;
use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::state::FetchMore;
use dioxus::prelude::*;
use studio_core::{PageField, PageTypeId, PageValidationError, error_for_field};
use studio_model::PageType;

/// Properties for OrganizeContent component
#[derive(Props, Clone, PartialEq)]
pub struct OrganizeContentProps {
    /// Currently assigned content type, if any
    #[props(default)]
    pub page_type: Option<PageType>,

    /// Catalog window to pick from
    #[props(default)]
    pub page_types: Vec<PageType>,

    /// Whether the type may still be changed
    #[props(default = true)]
    pub can_change_type: bool,

    /// Pagination state for the catalog window
    #[props(default)]
    pub fetch_more: FetchMore,

    /// Whether inputs are disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Field-level errors, passed through for display
    #[props(default)]
    pub errors: Vec<PageValidationError>,

    /// Type selection handler
    #[props(default)]
    pub on_page_type_change: EventHandler<PageTypeId>,

    /// Catalog search handler
    #[props(default)]
    pub on_search: EventHandler<String>,

    /// Load-more handler
    #[props(default)]
    pub on_fetch_more: EventHandler<()>,
}

/// Content type assignment card
#[component]
pub fn OrganizeContent(props: OrganizeContentProps) -> Element {
    let type_error =
        error_for_field(&props.errors, PageField::PageType).map(|e| e.message.clone());

    let mut query = use_signal(String::new);

    let selected = props
        .page_type
        .as_ref()
        .map(|t| t.id.to_string())
        .unwrap_or_default();

    let options: Vec<SelectOption> = props
        .page_types
        .iter()
        .map(|t| SelectOption::new(t.id.to_string(), t.name.clone()))
        .collect();

    let on_page_type_change = props.on_page_type_change;
    let on_search = props.on_search;

    rsx! {
        Card {
            title: "Organization",

            if props.can_change_type {
                TextInput {
                    value: query(),
                    label: "Search content types",
                    placeholder: "Type to search…",
                    disabled: props.disabled,
                    on_change: move |value: String| {
                        query.set(value.clone());
                        on_search.call(value);
                    },
                }

                Select {
                    value: selected,
                    options,
                    label: "Content type",
                    placeholder: "Select content type",
                    required: true,
                    disabled: props.disabled,
                    error: type_error,
                    on_change: move |value: String| {
                        if let Ok(id) = value.parse::<PageTypeId>() {
                            on_page_type_change.call(id);
                        }
                    },
                }

                if props.fetch_more.has_more {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: props.disabled || props.fetch_more.loading,
                        onclick: move |_| props.on_fetch_more.call(()),
                        if props.fetch_more.loading { "Loading…" } else { "Load more" }
                    }
                }
            } else {
                div {
                    class: "field",
                    label { class: "field-label", "Content type" }
                    p {
                        class: "field-readonly",
                        {props.page_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()}
                    }
                    p {
                        class: "field-help",
                        "The content type cannot be changed after the page is created"
                    }
                }
            }
        }
    }
}
