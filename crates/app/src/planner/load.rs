use std::fmt::Display;

use shared_types::{HolidayResponse, HolidaySort};

use super::store::HolidayStore;

/// Shown for every failed load. The cause goes to the log, not the user.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load holidays. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Ready,
}

/// Handle for one in-flight load. Only the most recently issued ticket may
/// write its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub sort: HolidaySort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer load or a reinitialization superseded the ticket.
    Stale,
}

/// Drives the page's load lifecycle from the observed (user, sort) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadController {
    state: LoadState,
    generation: u64,
    last_key: Option<(i64, HolidaySort)>,
}

impl LoadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Record the current user and sort. Returns a ticket when a load should
    /// start: a user is present and the pair differs from the last one seen.
    ///
    /// With no user the state is left as it is, but the last pair is
    /// forgotten and pending loads are superseded, so the next sign-in
    /// always loads.
    pub fn observe(&mut self, user_id: Option<i64>, sort: HolidaySort) -> Option<LoadTicket> {
        let Some(user_id) = user_id else {
            if self.last_key.take().is_some() {
                self.generation += 1;
            }
            return None;
        };

        let key = (user_id, sort);
        if self.last_key == Some(key) {
            return None;
        }
        self.last_key = Some(key);
        self.generation += 1;
        self.state = LoadState::Loading;

        tracing::debug!(user_id, sort = sort.as_str(), generation = self.generation, "loading holidays");
        Some(LoadTicket {
            generation: self.generation,
            sort,
        })
    }

    /// Apply the result of the load started with `ticket`.
    pub fn complete<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<HolidayResponse>, E>,
        store: &mut HolidayStore,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding superseded holiday load"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(items) => {
                store.replace_all(items);
                self.state = LoadState::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, sort = ticket.sort.as_str(), "failed to load holidays");
                self.state = LoadState::Error(LOAD_FAILURE_MESSAGE.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Return to the initial state and supersede anything in flight. The
    /// next `observe` with a user present starts a load.
    pub fn reinitialize(&mut self, store: &mut HolidayStore) {
        store.clear();
        self.state = LoadState::Loading;
        self.last_key = None;
        self.generation += 1;
    }

    /// "Try Again": reinitialize and put the sort selector back to its
    /// initial value.
    pub fn retry(&mut self, store: &mut HolidayStore, sort: &mut HolidaySort) {
        self.reinitialize(store);
        *sort = HolidaySort::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::store::tests::holiday;
    use pretty_assertions::assert_eq;

    const ALICE: Option<i64> = Some(1);

    fn summer_trip() -> Vec<HolidayResponse> {
        vec![holiday("1", "Summer Trip", "2026-07-01", "2026-01-01T00:00:00+00:00")]
    }

    fn network_error() -> Result<Vec<HolidayResponse>, String> {
        Err("error sending request: connection refused".to_string())
    }

    #[test]
    fn starts_loading() {
        let controller = LoadController::new();
        assert_eq!(controller.state(), &LoadState::Loading);
    }

    #[test]
    fn no_user_never_loads() {
        let mut controller = LoadController::new();
        assert_eq!(controller.observe(None, HolidaySort::Unsorted), None);
        assert_eq!(controller.observe(None, HolidaySort::StartDate), None);
        assert_eq!(controller.state(), &LoadState::Loading);
    }

    #[test]
    fn successful_load_replaces_collection_and_is_ready() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();
        store.replace_all(vec![holiday("old", "Old", "2025-01-01", "2025-01-01T00:00:00+00:00")]);

        let ticket = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        assert_eq!(ticket.sort.as_str(), "");
        let outcome = controller.complete(ticket, Ok::<_, String>(summer_trip()), &mut store);

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(controller.state(), &LoadState::Ready);
        assert_eq!(store.items(), summer_trip().as_slice());
    }

    #[test]
    fn unchanged_pair_does_not_reload() {
        let mut controller = LoadController::new();
        assert!(controller.observe(ALICE, HolidaySort::Unsorted).is_some());
        assert!(controller.observe(ALICE, HolidaySort::Unsorted).is_none());
    }

    #[test]
    fn each_sort_change_loads_once() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let first = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        controller.complete(first, Ok::<_, String>(summer_trip()), &mut store);

        let second = controller.observe(ALICE, HolidaySort::StartDate).unwrap();
        assert_eq!(second.sort.as_str(), "date");
        assert_eq!(controller.state(), &LoadState::Loading);
        assert!(controller.observe(ALICE, HolidaySort::StartDate).is_none());

        let replacement = vec![holiday("2", "Alps", "2026-02-10", "2026-01-02T00:00:00+00:00")];
        controller.complete(second, Ok::<_, String>(replacement.clone()), &mut store);
        assert_eq!(store.items(), replacement.as_slice());
    }

    #[test]
    fn user_change_loads_again() {
        let mut controller = LoadController::new();
        assert!(controller.observe(ALICE, HolidaySort::Name).is_some());
        assert!(controller.observe(Some(2), HolidaySort::Name).is_some());
    }

    #[test]
    fn failure_sets_fixed_message() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let ticket = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        let outcome = controller.complete(ticket, network_error(), &mut store);

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(
            controller.state(),
            &LoadState::Error("Failed to load holidays. Please try again later.".to_string())
        );
    }

    #[test]
    fn failure_message_is_independent_of_cause() {
        for cause in ["Unauthorized: Authentication required", "invalid JSON", ""] {
            let mut controller = LoadController::new();
            let ticket = controller.observe(ALICE, HolidaySort::Name).unwrap();
            controller.complete(
                ticket,
                Err::<Vec<HolidayResponse>, _>(cause),
                &mut HolidayStore::default(),
            );
            assert_eq!(controller.state(), &LoadState::Error(LOAD_FAILURE_MESSAGE.into()));
        }
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let slow = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        let fast = controller.observe(ALICE, HolidaySort::StartDate).unwrap();

        let fresh = vec![holiday("2", "Alps", "2026-02-10", "2026-01-02T00:00:00+00:00")];
        assert_eq!(
            controller.complete(fast, Ok::<_, String>(fresh.clone()), &mut store),
            LoadOutcome::Applied
        );
        assert_eq!(
            controller.complete(slow, Ok::<_, String>(summer_trip()), &mut store),
            LoadOutcome::Stale
        );
        assert_eq!(store.items(), fresh.as_slice());
        assert_eq!(controller.state(), &LoadState::Ready);
    }

    #[test]
    fn retry_reinitializes_and_reloads() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let ticket = controller.observe(ALICE, HolidaySort::Name).unwrap();
        controller.complete(ticket, network_error(), &mut store);

        controller.reinitialize(&mut store);
        assert_eq!(controller.state(), &LoadState::Loading);
        assert!(store.is_empty());

        let retry = controller
            .observe(ALICE, HolidaySort::default())
            .expect("reinitialized controller loads again");
        controller.complete(retry, Ok::<_, String>(summer_trip()), &mut store);
        assert_eq!(controller.state(), &LoadState::Ready);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn retry_resets_sort_to_initial_value() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();
        let mut sort = HolidaySort::StartDate;

        let ticket = controller.observe(ALICE, sort).unwrap();
        assert_eq!(ticket.sort.as_str(), "date");
        controller.complete(ticket, network_error(), &mut store);

        controller.retry(&mut store, &mut sort);
        assert_eq!(sort, HolidaySort::Unsorted);
        assert_eq!(controller.state(), &LoadState::Loading);

        let next = controller.observe(ALICE, sort).unwrap();
        assert_eq!(next.sort.as_str(), "");
    }

    #[test]
    fn reinitialize_supersedes_in_flight_load() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let pending = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        controller.reinitialize(&mut store);
        assert_eq!(
            controller.complete(pending, Ok::<_, String>(summer_trip()), &mut store),
            LoadOutcome::Stale
        );
        assert!(store.is_empty());
        assert_eq!(controller.state(), &LoadState::Loading);
    }

    #[test]
    fn logout_keeps_state_but_next_login_reloads() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let ticket = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        controller.complete(ticket, Ok::<_, String>(summer_trip()), &mut store);

        assert!(controller.observe(None, HolidaySort::Unsorted).is_none());
        assert_eq!(controller.state(), &LoadState::Ready);
        assert_eq!(store.len(), 1);

        assert!(controller.observe(ALICE, HolidaySort::Unsorted).is_some());
    }

    #[test]
    fn logout_supersedes_pending_load() {
        let mut controller = LoadController::new();
        let mut store = HolidayStore::default();

        let pending = controller.observe(ALICE, HolidaySort::Unsorted).unwrap();
        controller.observe(None, HolidaySort::Unsorted);
        assert_eq!(
            controller.complete(pending, Ok::<_, String>(summer_trip()), &mut store),
            LoadOutcome::Stale
        );
        assert!(store.is_empty());
    }
}
