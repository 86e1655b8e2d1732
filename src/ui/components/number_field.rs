use dioxus::prelude::*;

use crate::ui::theme;

/// Non-negative decimal input with a unit suffix.
///
/// The parent owns the text; every keystroke is forwarded through `on_input` and the
/// parent decides whether to keep it.
#[component]
pub fn NumberField(
    id: String,
    value: String,
    unit: &'static str,
    step: &'static str,
    invalid: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2 sm:gap-4",
            input {
                id: "{id}",
                r#type: "number",
                min: "0",
                step: "{step}",
                placeholder: "0",
                class: "{theme::input_class(invalid)}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            span { class: "{theme::UNIT}", "{unit}" }
        }
    }
}

/// Headline field with a label and a "required" hint when `missing`.
#[component]
pub fn RequiredField(
    id: String,
    label: &'static str,
    value: String,
    unit: &'static str,
    step: &'static str,
    missing: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "{theme::CARD} space-y-2",
            label { r#for: "{id}", class: "{theme::FIELD_LABEL}", "{label}" }
            NumberField {
                id: id.clone(),
                value,
                unit,
                step,
                invalid: missing,
                on_input,
            }
            if missing {
                p { class: "{theme::ERROR_TEXT}", "Required" }
            }
        }
    }
}
