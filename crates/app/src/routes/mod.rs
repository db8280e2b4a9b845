pub mod holidays;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdLogOut, LdPlane};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;
use shared_ui::{Button, ButtonVariant};

use holidays::HolidaysPage;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    HolidaysPage {},
    #[end_layout]
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout. Resolves the session cookie server-side before
/// rendering, and sends anonymous visitors to the login page.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    // `?` propagates RenderError during suspension so Dioxus knows to
    // re-render this component when the server future resolves.
    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Signed-in shell: top bar with the user's name and sign-out.
#[component]
fn AppLayout() -> Element {
    let flags: FeatureFlags = use_context();
    let mut auth = use_auth();

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    let sign_out = move |_| {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!(error = %e, "logout request failed");
            }
        });
        auth.clear_auth();
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "app-navbar",
                Link { to: Route::HolidaysPage {}, class: "app-brand",
                    Icon::<LdPlane> { icon: LdPlane, width: 20, height: 20 }
                    span { "Holiday Planner" }
                }
                div { class: "app-navbar-actions",
                    if flags.api_docs {
                        a { class: "app-navbar-link", href: "/docs", target: "_blank",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                            "API Docs"
                        }
                    }
                    span { class: "app-user", "{display_name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Sign Out"
                    }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
