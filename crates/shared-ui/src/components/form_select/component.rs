use dioxus::prelude::*;

/// A native `<select>` built from `(value, label)` pairs.
///
/// The option whose value equals `value` is marked selected.
#[component]
pub fn FormSelect(
    id: String,
    /// Current selected value.
    #[props(default)]
    value: String,
    /// `(value, label)` pairs in display order.
    options: Vec<(String, String)>,
    /// Called with the newly selected value.
    #[props(default)]
    on_change: EventHandler<String>,
    #[props(default)]
    label: String,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}", "{label}" }
            }
            select {
                id: "{id}",
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| on_change.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
