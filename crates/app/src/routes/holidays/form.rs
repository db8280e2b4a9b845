use dioxus::prelude::*;
use shared_types::{parse_date, AppError, CreateHolidayRequest};
use shared_ui::{Alert, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Textarea};
use std::collections::HashMap;
use validator::Validate;

use crate::planner::FormCapability;

/// Create/edit form. Creates by default; while the list has a record
/// selected for editing the fields hold that record and saving updates it.
#[component]
pub fn HolidayForm(form: FormCapability) -> Element {
    let mut name = use_signal(String::new);
    let mut destination = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let mut reset = move || {
        name.set(String::new());
        destination.set(String::new());
        start_date.set(String::new());
        end_date.set(String::new());
        notes.set(String::new());
        field_errors.set(HashMap::new());
        error_msg.set(None);
    };

    // --- Hydration: follow the editing selection ---
    let mut hydrated_id = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let selected = form.editing();
        let selected_id = selected.as_ref().map(|h| h.id.clone());
        if *hydrated_id.peek() == selected_id {
            return;
        }
        hydrated_id.set(selected_id);
        match selected {
            Some(h) => {
                name.set(h.name);
                destination.set(h.destination);
                start_date.set(h.start_date);
                end_date.set(h.end_date);
                notes.set(h.notes.unwrap_or_default());
                field_errors.set(HashMap::new());
                error_msg.set(None);
            }
            None => reset(),
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if in_flight() {
            return;
        }

        let body = match build_request(
            &name.read(),
            &destination.read(),
            &start_date.read(),
            &end_date.read(),
            &notes.read(),
        ) {
            Ok(body) => body,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(HashMap::new());
        error_msg.set(None);

        let mut form = form;
        let editing_id = form.editing().map(|h| h.id);

        spawn(async move {
            in_flight.set(true);
            let result = match editing_id.clone() {
                Some(id) => server::api::update_holiday(id, body).await,
                None => server::api::create_holiday(body).await,
            };
            match result {
                Ok(saved) => {
                    // Leave the fields alone if another record was picked
                    // for editing while this save was in flight.
                    let still_current = match editing_id.as_deref() {
                        Some(id) => {
                            if !form.update_by_id(saved) {
                                tracing::warn!(holiday_id = %id, "saved holiday is no longer loaded");
                            }
                            form.finish_edit_of(id)
                        }
                        None => {
                            form.append(saved);
                            form.editing().is_none()
                        }
                    };
                    if still_current {
                        reset();
                    }
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
            in_flight.set(false);
        });
    };

    let is_editing = form.editing().is_some();
    let (title, submit_label) = if is_editing {
        ("Edit Holiday", "Save Changes")
    } else {
        ("Add a Holiday", "Add Holiday")
    };
    let errors = field_errors();

    rsx! {
        Card { class: "holiday-form-card",
            CardHeader {
                title: title,
                description: "Where are you going, and when?",
            }
            CardContent {
                if let Some(err) = error_msg() {
                    Alert { "{err}" }
                }

                form { class: "holiday-form", onsubmit: handle_save,
                    Input {
                        id: "holiday-name",
                        label: "Name",
                        placeholder: "Summer Trip",
                        value: name(),
                        on_input: move |e: FormEvent| name.set(e.value()),
                        error: errors.get("name").cloned(),
                    }
                    Input {
                        id: "holiday-destination",
                        label: "Destination",
                        placeholder: "Lisbon, Portugal",
                        value: destination(),
                        on_input: move |e: FormEvent| destination.set(e.value()),
                        error: errors.get("destination").cloned(),
                    }
                    div { class: "holiday-form-dates",
                        Input {
                            id: "holiday-start",
                            label: "Start date",
                            input_type: "date",
                            value: start_date(),
                            on_input: move |e: FormEvent| start_date.set(e.value()),
                            error: errors.get("start_date").cloned(),
                        }
                        Input {
                            id: "holiday-end",
                            label: "End date",
                            input_type: "date",
                            value: end_date(),
                            on_input: move |e: FormEvent| end_date.set(e.value()),
                            error: errors.get("end_date").cloned(),
                        }
                    }
                    Textarea {
                        id: "holiday-notes",
                        label: "Notes",
                        placeholder: "Flights, hotels, things to see...",
                        rows: 3,
                        value: notes(),
                        on_input: move |e: FormEvent| notes.set(e.value()),
                        error: errors.get("notes").cloned(),
                    }
                    div { class: "holiday-form-actions",
                        Button {
                            button_type: "submit",
                            loading: in_flight(),
                            "{submit_label}"
                        }
                        if is_editing {
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: in_flight(),
                                onclick: move |_| {
                                    let mut form = form;
                                    form.finish_edit();
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Validate the raw field values and build the request body, or return the
/// messages to show beside each field.
fn build_request(
    name: &str,
    destination: &str,
    start: &str,
    end: &str,
    notes: &str,
) -> Result<CreateHolidayRequest, HashMap<String, String>> {
    let start_date = parse_date(start);
    let end_date = parse_date(end);
    // A missing date is reported on its own, not as a range error.
    let fallback = start_date.or(end_date).unwrap_or_default();

    let req = CreateHolidayRequest {
        name: name.to_string(),
        destination: destination.to_string(),
        start_date: start_date.unwrap_or(fallback),
        end_date: end_date.unwrap_or(fallback),
        notes: Some(notes.to_string()),
    }
    .normalized();

    let mut errors = req
        .validate()
        .err()
        .map(|e| AppError::from(e).field_errors)
        .unwrap_or_default();
    if start_date.is_none() {
        errors.insert("start_date".into(), "Start date is required".into());
    }
    if end_date.is_none() {
        errors.insert("end_date".into(), "End date is required".into());
    }

    if errors.is_empty() {
        Ok(req)
    } else {
        Err(errors)
    }
}
