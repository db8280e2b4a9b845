use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{parse_date, AppError, HolidayResponse, HolidaySort, HOLIDAY_SORTS};
use shared_ui::{
    Alert, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, EmptyState,
    FormSelect,
};

use crate::planner::ListCapability;

/// Sortable table of holidays with edit and delete actions.
#[component]
pub fn HolidayList(list: ListCapability) -> Element {
    let mut deleting = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let holidays = list.holidays();
    let editing_id = list.editing_id();
    let sort = list.sort();
    let today = Local::now().date_naive();

    let sort_options: Vec<(String, String)> = HOLIDAY_SORTS
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    let handle_delete = move |id: String| {
        if deleting().is_some() {
            return;
        }
        let mut list = list;
        spawn(async move {
            deleting.set(Some(id.clone()));
            error_msg.set(None);
            match server::api::delete_holiday(id.clone()).await {
                Ok(()) => {
                    list.remove_by_id(&id);
                }
                Err(e) => {
                    tracing::warn!(holiday_id = %id, error = %e, "delete failed");
                    error_msg.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            deleting.set(None);
        });
    };

    let count_label = match holidays.len() {
        1 => "1 trip planned".to_string(),
        n => format!("{n} trips planned"),
    };

    rsx! {
        Card { class: "holiday-list-card",
            CardHeader {
                title: "Your Holidays",
                description: count_label,
                actions: rsx! {
                    FormSelect {
                        id: "holiday-sort",
                        label: "Sort by",
                        value: sort.as_str().to_string(),
                        options: sort_options,
                        on_change: move |value: String| {
                            let mut list = list;
                            list.set_sort(HolidaySort::from_str_or_default(&value));
                        },
                    }
                },
            }
            CardContent {
                if let Some(err) = error_msg() {
                    Alert { "{err}" }
                }

                if holidays.is_empty() {
                    EmptyState {
                        title: "No holidays yet",
                        description: "Add your first trip with the form to start planning.",
                    }
                } else {
                    table { class: "holiday-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Destination" }
                                th { "Dates" }
                                th { "Length" }
                                th { class: "holiday-table-actions", span { class: "sr-only", "Actions" } }
                            }
                        }
                        tbody {
                            for holiday in holidays {
                                HolidayRow {
                                    key: "{holiday.id}",
                                    is_editing: editing_id.as_deref() == Some(holiday.id.as_str()),
                                    is_deleting: deleting().as_deref() == Some(holiday.id.as_str()),
                                    status: TripStatus::of(&holiday, today),
                                    holiday: holiday.clone(),
                                    on_edit: move |id: String| {
                                        let mut list = list;
                                        list.begin_edit(&id);
                                    },
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Where a trip sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TripStatus {
    Upcoming,
    Ongoing,
    Past,
    Unknown,
}

impl TripStatus {
    fn of(holiday: &HolidayResponse, today: NaiveDate) -> Self {
        match (parse_date(&holiday.start_date), parse_date(&holiday.end_date)) {
            (Some(start), _) if today < start => TripStatus::Upcoming,
            (_, Some(end)) if today > end => TripStatus::Past,
            (Some(_), Some(_)) => TripStatus::Ongoing,
            _ => TripStatus::Unknown,
        }
    }

    fn badge(&self) -> Option<(BadgeVariant, &'static str)> {
        match self {
            TripStatus::Upcoming => Some((BadgeVariant::Info, "Upcoming")),
            TripStatus::Ongoing => Some((BadgeVariant::Success, "Ongoing")),
            TripStatus::Past => Some((BadgeVariant::Muted, "Past")),
            TripStatus::Unknown => None,
        }
    }
}

fn trip_length(holiday: &HolidayResponse) -> String {
    match holiday.trip_days() {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{days} days"),
        None => "-".to_string(),
    }
}

#[component]
fn HolidayRow(
    holiday: HolidayResponse,
    is_editing: bool,
    is_deleting: bool,
    status: TripStatus,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_id = holiday.id.clone();
    let delete_id = holiday.id.clone();
    let length = trip_length(&holiday);

    rsx! {
        tr { class: "holiday-row", "data-editing": is_editing,
            td {
                div { class: "holiday-name", "{holiday.name}" }
                if let Some((variant, label)) = status.badge() {
                    Badge { variant, "{label}" }
                }
                if let Some(notes) = &holiday.notes {
                    p { class: "holiday-notes", "{notes}" }
                }
            }
            td { "{holiday.destination}" }
            td { class: "holiday-dates", "{holiday.start_date} to {holiday.end_date}" }
            td { "{length}" }
            td { class: "holiday-table-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: is_editing || is_deleting,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                    span { class: "sr-only", "Edit {holiday.name}" }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    loading: is_deleting,
                    loading_text: "Deleting...",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                    span { class: "sr-only", "Delete {holiday.name}" }
                }
            }
        }
    }
}
