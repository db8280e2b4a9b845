use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCompass;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, EmptyState};

use crate::routes::Route;

/// Fallback for any path the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let description = format!(
        "Nothing lives at {}. Your holidays are still where you left them.",
        requested_path(&route)
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "lost-page",
            Card { class: "lost-card",
                CardContent {
                    Icon::<LdCompass> { icon: LdCompass, width: 40, height: 40, class: "lost-icon" }
                    EmptyState {
                        title: "This trip isn't on the map",
                        description,
                        Link { to: Route::HolidaysPage {}, class: "lost-link", "Back to my holidays" }
                    }
                }
            }
        }
    }
}

fn requested_path(segments: &[String]) -> String {
    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}
