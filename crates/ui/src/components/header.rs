//! Screen header components
//!
//! `AppHeader` renders the back link with the section name; `PageHeader`
//! renders the screen title underneath it.

use dioxus::prelude::*;

/// Properties for AppHeader component
#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    /// Section name shown next to the back link
    pub section: String,

    /// Back navigation handler
    #[props(default)]
    pub on_back: EventHandler<()>,
}

/// Back link + section name row at the top of a screen
#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    rsx! {
        div {
            class: "app-header",

            button {
                class: "app-header-back",
                r#type: "button",
                onclick: move |_| props.on_back.call(()),
                "‹"
            }

            span { class: "app-header-section", "{props.section}" }
        }
    }
}

/// Properties for PageHeader component
#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Screen title
    pub title: String,
}

/// Large screen title under the app header
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        h1 { class: "page-header", "{props.title}" }
    }
}
