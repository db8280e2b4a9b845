mod form;
mod list;

use dioxus::prelude::*;
use shared_types::HolidaySort;
use shared_ui::{Alert, Button, ButtonVariant, PageHeader, SkeletonList};

use crate::auth::use_auth;
use crate::planner::{FormCapability, HolidayStore, ListCapability, LoadController, LoadState};

use form::HolidayForm;
use list::HolidayList;

/// The signed-in user's holidays: a create/edit form beside the sortable
/// list. Reloads whenever the user or the sort order changes.
#[component]
pub fn HolidaysPage() -> Element {
    let auth = use_auth();
    let mut store = use_signal(HolidayStore::default);
    let mut sort = use_signal(HolidaySort::default);
    let mut controller = use_signal(LoadController::new);
    // Bumped by "Try Again" so the effect reruns even if nothing else changed.
    let mut epoch = use_signal(|| 0u64);

    use_effect(move || {
        let user_id = auth.user_id();
        let selected = sort();
        let _ = epoch();

        let Some(ticket) = controller.write().observe(user_id, selected) else {
            return;
        };
        spawn(async move {
            let result = server::api::get_holidays(ticket.sort.as_str().to_string()).await;
            controller.write().complete(ticket, result, &mut store.write());
        });
    });

    let retry = move |_: MouseEvent| {
        controller.write().retry(&mut store.write(), &mut sort.write());
        epoch += 1;
    };

    let state = controller.read().state().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./holidays.css") }
        HolidaysView { state, store, sort, on_retry: retry }
    }
}

/// One of the three page states. Ready hands the form and the list their
/// capabilities over the shared store.
#[component]
fn HolidaysView(
    state: LoadState,
    store: Signal<HolidayStore>,
    sort: Signal<HolidaySort>,
    on_retry: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "holidays-page",
            match state {
                LoadState::Loading => rsx! {
                    div { class: "holidays-loading", role: "status",
                        SkeletonList { rows: 3 }
                        p { "Loading your holidays..." }
                    }
                },
                LoadState::Error(message) => rsx! {
                    div { class: "holidays-error",
                        Alert { "{message}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |evt| on_retry.call(evt),
                            "Try Again"
                        }
                    }
                },
                LoadState::Ready => rsx! {
                    PageHeader {
                        title: "Holiday Planner",
                        subtitle: "Plan and organize your upcoming trips in one place",
                    }
                    div { class: "holidays-layout",
                        HolidayForm { form: FormCapability::new(store, sort) }
                        HolidayList { list: ListCapability::new(store, sort) }
                    }
                },
            }
        }
    }
}
