//! Visibility card
//!
//! Toggles publication and schedules a future publication date. The status
//! messages are supplied by the caller so the date formatting follows the
//! active locale.

use crate::components::card::Card;
use crate::components::inputs::{DateInput, Toggle};
use chrono::NaiveDate;
use dioxus::prelude::*;
use studio_core::{PageField, PageValidationError, error_for_field};

/// Localized status strings shown under the publication toggle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityMessages {
    /// Shown while the page is published
    pub visible_label: String,
    /// Shown while the page is hidden
    pub hidden_label: String,
    /// Extra line shown while hidden and a publication date is scheduled
    pub hidden_second_label: Option<String>,
}

/// Properties for VisibilityCard component
#[derive(Props, Clone, PartialEq)]
pub struct VisibilityCardProps {
    /// Whether the page is published
    pub is_published: bool,

    /// Scheduled publication date, if any
    #[props(default)]
    pub publication_date: Option<NaiveDate>,

    /// Status messages for the current locale
    pub messages: VisibilityMessages,

    /// Whether inputs are disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Field-level errors, passed through for display
    #[props(default)]
    pub errors: Vec<PageValidationError>,

    /// Publication toggle handler
    #[props(default)]
    pub on_published_change: EventHandler<bool>,

    /// Publication date change handler
    #[props(default)]
    pub on_date_change: EventHandler<Option<NaiveDate>>,
}

/// Publication status card with a schedule date for hidden pages
#[component]
pub fn VisibilityCard(props: VisibilityCardProps) -> Element {
    let date_error =
        error_for_field(&props.errors, PageField::PublicationDate).map(|e| e.message.clone());
    let published_error =
        error_for_field(&props.errors, PageField::IsPublished).map(|e| e.message.clone());

    let status = if props.is_published {
        props.messages.visible_label.clone()
    } else {
        props.messages.hidden_label.clone()
    };

    rsx! {
        Card {
            title: "Visibility",

            Toggle {
                checked: props.is_published,
                label: "Published",
                help_text: status,
                disabled: props.disabled,
                on_change: move |checked| props.on_published_change.call(checked),
            }

            if let Some(error) = &published_error {
                p { class: "field-error", "{error}" }
            }

            if !props.is_published {
                DateInput {
                    value: props.publication_date,
                    label: "Publish on",
                    help_text: "Leave empty to keep the page hidden",
                    disabled: props.disabled,
                    error: date_error,
                    on_change: move |date| props.on_date_change.call(date),
                }

                if let Some(second) = &props.messages.hidden_second_label {
                    p { class: "visibility-note", "{second}" }
                }
            }
        }
    }
}
