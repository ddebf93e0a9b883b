//! Reactive wrapper around [`ListState`]: owns the signal, runs fetches and
//! row mutations on the local executor and debounces server-side search.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::entity::ListEntity;
use super::fetcher::Fetcher;
use super::row_actions::{PendingMutation, RowActionDispatcher};
use super::state::{ListAction, ListEffect, ListState};
use crate::shared::api::ApiClient;

pub struct ListController<T: ListEntity> {
    pub state: RwSignal<ListState<T>>,
    fetcher: StoredValue<Fetcher<T>, LocalStorage>,
    dispatcher: StoredValue<RowActionDispatcher<T>, LocalStorage>,
    debounce: StoredValue<Option<Timeout>, LocalStorage>,
    debounce_ms: u32,
}

impl<T: ListEntity> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListEntity> Copy for ListController<T> {}

impl<T: ListEntity> ListController<T> {
    pub fn new(client: Rc<dyn ApiClient>, debounce_ms: u32) -> Self {
        Self {
            state: RwSignal::new(ListState::new()),
            fetcher: StoredValue::new_local(Fetcher::new(Rc::clone(&client), T::ENDPOINT)),
            dispatcher: StoredValue::new_local(RowActionDispatcher::new(client)),
            debounce: StoredValue::new_local(None),
            debounce_ms,
        }
    }

    /// Create the controller for a mounted screen: loads the first page and
    /// drops in-flight work when the owner is cleaned up
    pub fn mount(client: Rc<dyn ApiClient>, debounce_ms: u32) -> Self {
        let controller = Self::new(client, debounce_ms);
        controller.load();
        on_cleanup(move || controller.dispose());
        controller
    }

    pub fn dispatch(&self, action: ListAction<T>) {
        let effect = self
            .state
            .try_update(|state| state.apply(action))
            .unwrap_or(ListEffect::None);
        match effect {
            ListEffect::None => {}
            ListEffect::Refetch => self.load(),
            ListEffect::DebouncedRefetch => self.schedule_load(),
        }
    }

    /// Fetch the current page. Responses of earlier calls are discarded.
    pub fn load(&self) {
        let Some(query) = self.state.try_with_untracked(|state| state.query()) else {
            return;
        };
        let Some(pending) = self.fetcher.try_with_value(|fetcher| fetcher.fetch(&query)) else {
            return;
        };
        log::debug!("{}: fetching page {} ({} rows)", T::KEY, query.page, query.limit);
        self.state.update(|state| {
            state.apply(ListAction::FetchStarted);
        });

        let this = *self;
        spawn_local(async move {
            if let Some(action) = pending.await.into_action() {
                this.dispatch(action);
            }
        });
    }

    fn schedule_load(&self) {
        let this = *self;
        let timeout = Timeout::new(self.debounce_ms, move || this.load());
        // replacing the handle cancels the previous timer
        self.debounce.try_update_value(|slot| *slot = Some(timeout));
    }

    /// Send a confirmed row mutation and fold the result into the list
    pub fn perform(&self, mutation: PendingMutation<T>) {
        let Some(pending) = self
            .dispatcher
            .try_with_value(|dispatcher| dispatcher.execute(mutation))
        else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let action = pending.await;
            this.dispatch(action);
        });
    }

    fn dispose(&self) {
        self.fetcher.try_with_value(|fetcher| fetcher.cancel());
        self.debounce.try_update_value(|slot| *slot = None);
    }
}
