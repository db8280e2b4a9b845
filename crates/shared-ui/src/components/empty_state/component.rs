use dioxus::prelude::*;

/// Centered placeholder for an empty collection, with an optional call to action.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            p { class: "empty-state-title", "{title}" }
            if let Some(description) = description {
                p { class: "empty-state-description", "{description}" }
            }
            {children}
        }
    }
}
