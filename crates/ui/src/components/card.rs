//! Card layout primitives
//!
//! The editor screens are stacks of titled cards with spacers between them.

use dioxus::prelude::*;

/// Properties for Card component
#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Card title
    #[props(default)]
    pub title: Option<String>,

    /// Card body
    pub children: Element,
}

/// A titled content card
#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        section {
            class: "card",

            if let Some(title) = &props.title {
                h3 { class: "card-title", "{title}" }
            }

            div {
                class: "card-body",
                {props.children}
            }
        }
    }
}

/// Vertical gap between stacked cards
#[component]
pub fn CardSpacer() -> Element {
    rsx! {
        div { class: "card-spacer" }
    }
}
