//! Bottom action bar
//!
//! Fixed bar with back, delete, and save actions. The save button reflects
//! the outcome of the last submit through `SaveState`.

use dioxus::prelude::*;

/// Outcome of the most recent save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// No save in flight
    #[default]
    Default,
    /// Submit running
    Loading,
    /// Last submit succeeded
    Success,
    /// Last submit failed
    Error,
}

impl SaveState {
    /// Label shown on the save button for this state
    pub fn label(&self) -> &'static str {
        match self {
            SaveState::Default => "Save",
            SaveState::Loading => "Saving…",
            SaveState::Success => "Saved",
            SaveState::Error => "Save failed",
        }
    }

    /// CSS modifier class for the save button
    pub fn class(&self) -> &'static str {
        match self {
            SaveState::Default => "",
            SaveState::Loading => "is-loading",
            SaveState::Success => "is-success",
            SaveState::Error => "is-error",
        }
    }
}

/// Properties for SaveBar component
#[derive(Props, Clone, PartialEq)]
pub struct SaveBarProps {
    /// Whether the save button is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Outcome of the last submit
    #[props(default)]
    pub state: SaveState,

    /// Whether the delete button is shown
    #[props(default = false)]
    pub show_delete: bool,

    /// Back/cancel handler
    #[props(default)]
    pub on_cancel: EventHandler<()>,

    /// Delete handler
    #[props(default)]
    pub on_delete: EventHandler<()>,

    /// Save handler
    #[props(default)]
    pub on_save: EventHandler<()>,
}

/// Fixed action bar with back, delete, and save buttons
#[component]
pub fn SaveBar(props: SaveBarProps) -> Element {
    let save_class = if props.state.class().is_empty() {
        "btn btn-primary".to_string()
    } else {
        format!("btn btn-primary {}", props.state.class())
    };

    rsx! {
        div {
            class: "save-bar",

            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| props.on_cancel.call(()),
                "Back"
            }

            div { class: "save-bar-spacer" }

            if props.show_delete {
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| props.on_delete.call(()),
                    "Delete"
                }
            }

            button {
                class: "{save_class}",
                r#type: "button",
                disabled: props.disabled || props.state == SaveState::Loading,
                onclick: move |_| props.on_save.call(()),
                "{props.state.label()}"
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_state_default() {
        assert_eq!(SaveState::default(), SaveState::Default);
    }

    #[test]
    fn test_save_state_labels() {
        assert_eq!(SaveState::Default.label(), "Save");
        assert_eq!(SaveState::Loading.label(), "Saving…");
        assert_eq!(SaveState::Success.label(), "Saved");
        assert_eq!(SaveState::Error.label(), "Save failed");
    }

    #[test]
    fn test_save_state_classes() {
        assert_eq!(SaveState::Default.class(), "");
        assert_eq!(SaveState::Error.class(), "is-error");
    }
}
