use shared_types::{HolidayResponse, HolidaySort};

/// The page's holiday collection and the record being edited, if any.
///
/// The editing selection is held by id and is dropped whenever its record
/// leaves the collection, so it never points at a record that is gone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayStore {
    items: Vec<HolidayResponse>,
    editing: Option<String>,
}

impl HolidayStore {
    pub fn items(&self) -> &[HolidayResponse] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn editing(&self) -> Option<&HolidayResponse> {
        let id = self.editing.as_deref()?;
        self.items.iter().find(|h| h.id == id)
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Swap in a freshly loaded collection, keeping the server's order.
    pub fn replace_all(&mut self, items: Vec<HolidayResponse>) {
        self.items = items;
        if let Some(id) = self.editing.as_deref() {
            if !self.contains(id) {
                self.editing = None;
            }
        }
    }

    /// Add a newly created record and restore `sort` ordering.
    pub fn append(&mut self, item: HolidayResponse, sort: HolidaySort) {
        self.items.push(item);
        sort.apply(&mut self.items);
    }

    /// Replace the record with the same id. Returns false when no such
    /// record is loaded.
    pub fn update_by_id(&mut self, item: HolidayResponse, sort: HolidaySort) -> bool {
        let Some(slot) = self.items.iter_mut().find(|h| h.id == item.id) else {
            return false;
        };
        *slot = item;
        sort.apply(&mut self.items);
        true
    }

    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|h| h.id != id);
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.items.len() != before
    }

    /// Select a loaded record for editing. Unknown ids leave the selection
    /// unchanged.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.editing = Some(id.to_string());
        true
    }

    pub fn clear_edit(&mut self) {
        self.editing = None;
    }

    /// End the edit of `id` only if it is still the selected record.
    /// Returns false when the selection moved on in the meantime.
    pub fn finish_edit_of(&mut self, id: &str) -> bool {
        if self.editing.as_deref() != Some(id) {
            return false;
        }
        self.editing = None;
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.editing = None;
    }

    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|h| h.id == id)
    }
}
