//! Reference assignment dialog
//!
//! Modal picker for reference attribute values. Selection starts from the
//! already-assigned pages, so confirming without touching anything keeps
//! the assignment unchanged. Searching and paging go through the caller;
//! the dialog only tracks which rows are checked.

use crate::components::inputs::{Checkbox, TextInput};
use crate::state::FetchMore;
use dioxus::prelude::*;
use studio_core::PageId;
use studio_model::ReferencePage;

/// Properties for AssignReferencesDialog component
#[derive(Props, Clone, PartialEq)]
pub struct AssignReferencesDialogProps {
    /// Pages already assigned to the attribute
    #[props(default)]
    pub pre_selected: Vec<ReferencePage>,

    /// Candidate window produced by the current search
    #[props(default)]
    pub candidates: Vec<ReferencePage>,

    /// Whether a candidate fetch is in flight
    #[props(default = false)]
    pub loading: bool,

    /// Pagination state for the candidate window
    #[props(default)]
    pub fetch_more: FetchMore,

    /// Search handler, called with the query text
    #[props(default)]
    pub on_fetch: EventHandler<String>,

    /// Load-more handler
    #[props(default)]
    pub on_fetch_more: EventHandler<()>,

    /// Close handler (backdrop, cancel button)
    #[props(default)]
    pub on_close: EventHandler<()>,

    /// Confirm handler, called with the checked page ids
    #[props(default)]
    pub on_submit: EventHandler<Vec<PageId>>,
}

/// Modal dialog for assigning reference pages to an attribute
#[component]
pub fn AssignReferencesDialog(props: AssignReferencesDialogProps) -> Element {
    let seed: Vec<PageId> = props.pre_selected.iter().map(|p| p.id).collect();
    let mut selected = use_signal(move || seed.clone());
    let mut query = use_signal(String::new);

    let on_fetch = props.on_fetch;
    let on_submit = props.on_submit;
    let on_close = props.on_close;

    let toggle = move |id: PageId| {
        let mut current = selected.write();
        if let Some(pos) = current.iter().position(|s| *s == id) {
            current.remove(pos);
        } else {
            current.push(id);
        }
    };

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "dialog",
                onclick: move |event| event.stop_propagation(),

                h2 { class: "dialog-title", "Assign page" }

                div {
                    class: "dialog-body",

                    TextInput {
                        value: query(),
                        placeholder: "Search pages…",
                        on_change: move |value: String| {
                            query.set(value.clone());
                            on_fetch.call(value);
                        },
                    }

                    if props.loading && props.candidates.is_empty() {
                        p { class: "dialog-empty", "Loading…" }
                    } else if props.candidates.is_empty() {
                        p { class: "dialog-empty", "No pages found" }
                    }

                    div {
                        class: "dialog-list",
                        for candidate in props.candidates.iter() {
                            {
                                let id = candidate.id;
                                let mut toggle = toggle;
                                rsx! {
                                    Checkbox {
                                        key: "{id}",
                                        checked: selected.read().contains(&id),
                                        label: candidate.title.clone(),
                                        on_change: move |_| toggle(id),
                                    }
                                }
                            }
                        }
                    }

                    if props.fetch_more.has_more {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: props.fetch_more.loading,
                            onclick: move |_| props.on_fetch_more.call(()),
                            if props.fetch_more.loading { "Loading…" } else { "Load more" }
                        }
                    }
                }

                div {
                    class: "dialog-actions",

                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_submit.call(selected.read().clone()),
                        "Assign"
                    }
                }
            }
        }
    }
}
