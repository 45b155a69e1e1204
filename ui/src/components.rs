//! Small form building blocks shared by the registration and edit views.

use dioxus::prelude::*;

/// Error text rendered adjacent to its input, or nothing.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(msg) => rsx! {
            span { class: "field-error", "{msg}" }
        },
        None => rsx! {},
    }
}

/// A labelled input with its validation message underneath.
#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { "{label}" }
            input {
                r#type: "{input_type}",
                class: if error.is_some() { "invalid" } else { "" },
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            FieldError { message: error.clone() }
        }
    }
}

/// A labelled select with a disabled placeholder entry.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] error: Option<String>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { "{label}" }
            select {
                class: if error.is_some() { "invalid" } else { "" },
                value: "{value}",
                onchange: move |evt| onchange.call(evt),
                option { value: "", disabled: true, selected: value.is_empty(), "Select..." }
                for (val, text) in options {
                    option { value: "{val}", selected: val == value, "{text}" }
                }
            }
            FieldError { message: error.clone() }
        }
    }
}
