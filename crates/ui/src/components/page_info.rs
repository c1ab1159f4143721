//! Page information card
//!
//! Edits the page title and plain-text body content.

use crate::components::card::Card;
use crate::components::inputs::{TextArea, TextInput};
use dioxus::prelude::*;
use studio_core::{PageField, PageValidationError, error_for_field};

/// Properties for PageInfo component
#[derive(Props, Clone, PartialEq)]
pub struct PageInfoProps {
    /// Current title value
    pub title: String,

    /// Current content value
    pub content: String,

    /// Whether inputs are disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Field-level errors, passed through for display
    #[props(default)]
    pub errors: Vec<PageValidationError>,

    /// Title change handler
    #[props(default)]
    pub on_title_change: EventHandler<String>,

    /// Content change handler
    #[props(default)]
    pub on_content_change: EventHandler<String>,
}

/// General information card (title + content)
#[component]
pub fn PageInfo(props: PageInfoProps) -> Element {
    let title_error = error_for_field(&props.errors, PageField::Title).map(|e| e.message.clone());
    let content_error =
        error_for_field(&props.errors, PageField::Content).map(|e| e.message.clone());

    rsx! {
        Card {
            title: "General Information",

            TextInput {
                value: props.title.clone(),
                label: "Title",
                placeholder: "Page title",
                required: true,
                disabled: props.disabled,
                error: title_error,
                on_change: move |value| props.on_title_change.call(value),
            }

            TextArea {
                value: props.content.clone(),
                label: "Content",
                placeholder: "Write the page content...",
                rows: 8,
                disabled: props.disabled,
                error: content_error,
                on_change: move |value| props.on_content_change.call(value),
            }
        }
    }
}
