use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::form::FormModel;
use super::model::CrudModal;
use crate::shared::api::ApiClient;

/// ViewModel of a create / edit modal.
///
/// The modal state lives in a local signal because picked files are
/// browser objects.
pub struct CrudViewModel<F: FormModel> {
    pub modal: RwSignal<CrudModal<F>, LocalStorage>,
    client: StoredValue<Rc<dyn ApiClient>, LocalStorage>,
}

impl<F: FormModel> Clone for CrudViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormModel> Copy for CrudViewModel<F> {}

impl<F: FormModel> CrudViewModel<F> {
    pub fn new(client: Rc<dyn ApiClient>) -> Self {
        Self {
            modal: RwSignal::new_local(CrudModal::new()),
            client: StoredValue::new_local(client),
        }
    }

    pub fn open_create(&self) {
        self.modal.update(|m| m.open_create());
    }

    pub fn open_edit(&self, record: &F::Record) {
        self.modal.update(|m| m.open_edit(record));
    }

    pub fn cancel(&self) {
        self.modal.update(|m| m.cancel());
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.modal.update(|m| m.set_field(field, value));
    }

    pub fn attach(&self, field: &'static str, file: Option<web_sys::File>) {
        self.modal.update(|m| m.attach(field, file));
    }

    /// Validate, send and, on success, close and hand the saved record
    /// (if the server echoed one) to `on_submit_success`
    pub fn save_command(&self, on_submit_success: Callback<Option<F::Record>>) {
        let Some(request) = self.modal.try_update(|m| m.begin_submit()).flatten() else {
            return;
        };
        let client = self.client.get_value();
        let modal = self.modal;

        spawn_local(async move {
            log::debug!("{} {}", request.method.as_str(), request.path);
            let response = client.send(request).await;
            match modal.try_update(|m| m.finish(response)) {
                Some(Ok(record)) => on_submit_success.run(record),
                Some(Err(message)) => log::warn!("Save failed: {}", message),
                None => {}
            }
        });
    }
}
