//! Form input components
//!
//! Styled input widgets used by the page editor cards:
//! **TextInput**, **TextArea**, **Select**, **Checkbox**, **Toggle**, and
//! **DateInput**. Each takes its value and an `EventHandler` callback; error
//! text switches the widget into its error styling.

use chrono::NaiveDate;
use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below the input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (switches to error styling)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = field_class("field-input", props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: usize,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let area_class = field_class("field-textarea", props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label { class: "field-label", "{label}" }
            }

            textarea {
                class: "{area_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value (empty when nothing is selected)
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder shown when no selection exists
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether a selection is required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = field_class("field-select", props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "checkbox",
            class: if props.disabled { "is-disabled" } else { "" },

            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            if let Some(label) = &props.label {
                span { class: "checkbox-label", "{label}" }
            }
        }
    }
}

// ============================================================================
// Toggle Component
// ============================================================================

/// Properties for Toggle component
#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    /// Whether on
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Switch-style toggle, rendered as a clickable row
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let handle_click = move |_| {
        if !props.disabled {
            props.on_change.call(!props.checked);
        }
    };

    rsx! {
        div {
            class: "toggle-row",
            class: if props.checked { "is-on" } else { "" },
            class: if props.disabled { "is-disabled" } else { "" },
            onclick: handle_click,

            div {
                class: "toggle-track",
                div { class: "toggle-thumb" }
            }

            div {
                class: "toggle-text",
                if let Some(label) = &props.label {
                    span { class: "toggle-label", "{label}" }
                }
                if let Some(help) = &props.help_text {
                    span { class: "toggle-help", "{help}" }
                }
            }
        }
    }
}

// ============================================================================
// Date Input Component
// ============================================================================

/// Properties for DateInput component
#[derive(Props, Clone, PartialEq)]
pub struct DateInputProps {
    /// Selected date
    pub value: Option<NaiveDate>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler; `None` means the date was cleared
    #[props(default)]
    pub on_change: EventHandler<Option<NaiveDate>>,
}

/// Date input backed by the platform date picker
#[component]
pub fn DateInput(props: DateInputProps) -> Element {
    let input_class = field_class("field-input", props.error.is_some(), props.disabled);
    let value = props
        .value
        .map(|d| d.format(HTML_DATE_FORMAT).to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label { class: "field-label", "{label}" }
            }

            input {
                class: "{input_class}",
                r#type: "date",
                value: "{value}",
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(parse_html_date(&e.value())),
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

/// Wire format of the platform date input
const HTML_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date input's value; empty or malformed input clears the date
fn parse_html_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, HTML_DATE_FORMAT).ok()
}

// ============================================================================
// Shared Pieces
// ============================================================================

/// Help-or-error line under an input
#[component]
fn FieldFooter(error: Option<String>, help_text: Option<String>) -> Element {
    rsx! {
        if let Some(error) = &error {
            p { class: "field-error", "{error}" }
        } else if let Some(help) = &help_text {
            p { class: "field-help", "{help}" }
        }
    }
}

/// Build the class list for an input widget
fn field_class(base: &str, has_error: bool, disabled: bool) -> String {
    let mut class = String::from(base);
    if has_error {
        class.push_str(" has-error");
    }
    if disabled {
        class.push_str(" is-disabled");
    }
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class() {
        assert_eq!(field_class("field-input", false, false), "field-input");
        assert_eq!(
            field_class("field-input", true, false),
            "field-input has-error"
        );
        assert_eq!(
            field_class("field-select", true, true),
            "field-select has-error is-disabled"
        );
    }

    #[test]
    fn test_parse_html_date() {
        assert_eq!(
            parse_html_date("2026-03-07"),
            NaiveDate::from_ymd_opt(2026, 3, 7)
        );
        assert_eq!(parse_html_date(""), None);
        assert_eq!(parse_html_date("07/03/2026"), None);
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("val", "Label");
        assert_eq!(opt.value, "val");
        assert_eq!(opt.label, "Label");
    }
}
