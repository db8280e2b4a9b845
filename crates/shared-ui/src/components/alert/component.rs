use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Error,
    Info,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Error => "error",
            AlertVariant::Info => "info",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            AlertVariant::Error => "alert",
            AlertVariant::Info => "status",
        }
    }
}

/// Banner for page- or form-level messages. Errors are announced to
/// assistive technology immediately.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert", "data-style": variant.class(), role: variant.role(),
            if let Some(title) = title {
                strong { class: "alert-title", "{title}" }
            }
            div { class: "alert-body", {children} }
        }
    }
}
