//! Delete confirmation dialog

use dioxus::prelude::*;

/// Properties for ConfirmDeleteDialog component
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Dialog title
    pub title: String,

    /// Confirmation message
    pub message: String,

    /// Confirm handler
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Cancel handler (backdrop, cancel button)
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

/// Modal confirmation before a destructive delete
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let on_cancel = props.on_cancel;

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "dialog dialog-narrow",
                onclick: move |event| event.stop_propagation(),

                h2 { class: "dialog-title", "{props.title}" }

                div {
                    class: "dialog-body",
                    p { "{props.message}" }
                }

                div {
                    class: "dialog-actions",

                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| props.on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
