use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Alert, Button, Card, CardContent, CardHeader, Input};
use std::collections::HashMap;

/// Email/password sign-in. A signed-in visitor always lands on the planner.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::HolidaysPage {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::HolidaysPage {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: "Sign In",
                    description: "Sign in to plan your next trip",
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors().get("email").cloned(),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors().get("password").cloned(),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_text: "Signing in...",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
