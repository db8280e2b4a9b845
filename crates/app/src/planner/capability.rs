use dioxus::prelude::*;
use shared_types::{HolidayResponse, HolidaySort};

use super::store::HolidayStore;

/// What the holiday form may do with the page's collection: add and
/// replace records, and end an edit.
#[derive(Clone, Copy, PartialEq)]
pub struct FormCapability {
    store: Signal<HolidayStore>,
    sort: Signal<HolidaySort>,
}

impl FormCapability {
    pub fn new(store: Signal<HolidayStore>, sort: Signal<HolidaySort>) -> Self {
        Self { store, sort }
    }

    /// The record being edited, if any.
    pub fn editing(&self) -> Option<HolidayResponse> {
        self.store.read().editing().cloned()
    }

    pub fn append(&mut self, item: HolidayResponse) {
        let sort = *self.sort.peek();
        self.store.write().append(item, sort);
    }

    pub fn update_by_id(&mut self, item: HolidayResponse) -> bool {
        let sort = *self.sort.peek();
        self.store.write().update_by_id(item, sort)
    }

    pub fn finish_edit(&mut self) {
        self.store.write().clear_edit();
    }

    /// End the edit of `id` if the user has not moved to another record.
    pub fn finish_edit_of(&mut self, id: &str) -> bool {
        self.store.write().finish_edit_of(id)
    }
}

/// What the holiday list may do: remove records, pick one for editing, and
/// change the sort order.
#[derive(Clone, Copy, PartialEq)]
pub struct ListCapability {
    store: Signal<HolidayStore>,
    sort: Signal<HolidaySort>,
}

impl ListCapability {
    pub fn new(store: Signal<HolidayStore>, sort: Signal<HolidaySort>) -> Self {
        Self { store, sort }
    }

    pub fn holidays(&self) -> Vec<HolidayResponse> {
        self.store.read().items().to_vec()
    }

    pub fn editing_id(&self) -> Option<String> {
        self.store.read().editing_id().map(str::to_string)
    }

    pub fn sort(&self) -> HolidaySort {
        *self.sort.read()
    }

    /// Changing the sort triggers a reload of the collection.
    pub fn set_sort(&mut self, sort: HolidaySort) {
        if *self.sort.peek() != sort {
            self.sort.set(sort);
        }
    }

    pub fn remove_by_id(&mut self, id: &str) -> bool {
        self.store.write().remove_by_id(id)
    }

    pub fn begin_edit(&mut self, id: &str) -> bool {
        self.store.write().begin_edit(id)
    }
}
