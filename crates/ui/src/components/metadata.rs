//! Metadata editor card
//!
//! Two key/value lists on one card: public metadata and private metadata.
//! Rows are edited in place; the change handlers carry the list kind so
//! the form state can route the edit to the right list.

use crate::components::card::Card;
use crate::components::inputs::TextInput;
use dioxus::prelude::*;
use studio_model::{MetadataEntry, MetadataKind};

/// Properties for Metadata component
#[derive(Props, Clone, PartialEq)]
pub struct MetadataProps {
    /// Public key/value entries
    pub metadata: Vec<MetadataEntry>,

    /// Private key/value entries
    pub private_metadata: Vec<MetadataEntry>,

    /// Whether inputs are disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Add-row handler
    #[props(default)]
    pub on_add: EventHandler<MetadataKind>,

    /// Row edit handler (kind, index, key, value)
    #[props(default)]
    pub on_change: EventHandler<(MetadataKind, usize, String, String)>,

    /// Row removal handler (kind, index)
    #[props(default)]
    pub on_remove: EventHandler<(MetadataKind, usize)>,
}

/// Metadata card with public and private entry lists
#[component]
pub fn Metadata(props: MetadataProps) -> Element {
    rsx! {
        Card {
            title: "Metadata",

            MetadataList {
                kind: MetadataKind::Public,
                entries: props.metadata.clone(),
                disabled: props.disabled,
                on_add: props.on_add,
                on_change: props.on_change,
                on_remove: props.on_remove,
            }

            MetadataList {
                kind: MetadataKind::Private,
                entries: props.private_metadata.clone(),
                disabled: props.disabled,
                on_add: props.on_add,
                on_change: props.on_change,
                on_remove: props.on_remove,
            }
        }
    }
}

/// Properties for one metadata list
#[derive(Props, Clone, PartialEq)]
struct MetadataListProps {
    kind: MetadataKind,
    entries: Vec<MetadataEntry>,
    disabled: bool,
    on_add: EventHandler<MetadataKind>,
    on_change: EventHandler<(MetadataKind, usize, String, String)>,
    on_remove: EventHandler<(MetadataKind, usize)>,
}

/// One key/value list with its heading and add button
#[component]
fn MetadataList(props: MetadataListProps) -> Element {
    let kind = props.kind;
    let on_add = props.on_add;
    let on_change = props.on_change;
    let on_remove = props.on_remove;

    let heading = match kind {
        MetadataKind::Public => "Metadata",
        MetadataKind::Private => "Private metadata",
    };

    rsx! {
        div {
            class: "metadata-list",

            h4 { class: "metadata-heading", "{heading}" }

            for (index, entry) in props.entries.iter().enumerate() {
                {
                    let key = entry.key.clone();
                    let value = entry.value.clone();
                    let key_for_value = key.clone();
                    let value_for_key = value.clone();

                    rsx! {
                        div {
                            key: "{kind:?}-{index}",
                            class: "metadata-row",

                            TextInput {
                                value: key.clone(),
                                placeholder: "Key",
                                disabled: props.disabled,
                                on_change: move |new_key: String| {
                                    on_change.call((kind, index, new_key, value_for_key.clone()))
                                },
                            }

                            TextInput {
                                value: value.clone(),
                                placeholder: "Value",
                                disabled: props.disabled,
                                on_change: move |new_value: String| {
                                    on_change.call((kind, index, key_for_value.clone(), new_value))
                                },
                            }

                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                disabled: props.disabled,
                                onclick: move |_| on_remove.call((kind, index)),
                                "✕"
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: props.disabled,
                onclick: move |_| on_add.call(kind),
                "Add field"
            }
        }
    }
}
