//! Create / edit modal state machine.
//!
//! `Closed -> Open -> Submitting -> Closed` on success, back to `Open` with
//! an error string on failure. A form that fails validation stays `Open`
//! and no request is built.

use contracts::shared::validation::FieldErrors;
use contracts::shared::{decode_mutation, ApiResponse};
use serde_json::Value;

use super::form::{Attachment, FormModel};
use crate::shared::api::{ApiError, ApiRequest};
use crate::shared::list::ListEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct CrudModal<F: FormModel> {
    pub phase: ModalPhase,
    pub form: F,
    pub attachments: Vec<Attachment>,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
}

impl<F: FormModel> Default for CrudModal<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormModel> CrudModal<F> {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            form: F::default(),
            attachments: Vec::new(),
            field_errors: FieldErrors::new(),
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn title(&self) -> String {
        if self.form.is_edit() {
            format!("Edit {}", F::NOUN)
        } else {
            format!("New {}", F::NOUN)
        }
    }

    fn open_with(&mut self, form: F) {
        *self = Self {
            phase: ModalPhase::Open,
            form,
            ..Self::new()
        };
    }

    pub fn open_create(&mut self) {
        self.open_with(F::default());
    }

    pub fn open_edit(&mut self, record: &F::Record) {
        self.open_with(F::from_record(record));
    }

    /// Discard edits. Ignored while a request is in flight.
    pub fn cancel(&mut self) {
        if self.phase == ModalPhase::Open {
            *self = Self::new();
        }
    }

    pub fn set_field(&mut self, field: &str, value: String) {
        self.form.set_value(field, value);
        self.field_errors.remove(field);
    }

    /// Replace the file of `field`; `None` clears it
    pub fn attach(&mut self, field: &'static str, file: Option<web_sys::File>) {
        self.attachments.retain(|a| a.field != field);
        if let Some(file) = file {
            self.attachments.push(Attachment { field, file });
            self.field_errors.remove(field);
        }
    }

    pub fn attachment(&self, field: &str) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.field == field)
    }

    /// Validate and build the request. `None` means nothing is sent, either
    /// because the form is invalid or because it is not open.
    pub fn begin_submit(&mut self) -> Option<ApiRequest> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        let errors = self.form.validate(&self.attachments);
        if !errors.is_empty() {
            self.field_errors = errors;
            self.error = Some("Please fix the highlighted fields".to_string());
            return None;
        }
        match self.form.request(&self.attachments) {
            Ok(request) => {
                self.field_errors = FieldErrors::new();
                self.error = None;
                self.phase = ModalPhase::Submitting;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Fold the server answer in. On success the modal closes and the echoed
    /// record (if any) is returned for the parent list.
    pub fn finish(&mut self, result: Result<Value, ApiError>) -> Result<Option<F::Record>, String> {
        if self.phase != ModalPhase::Submitting {
            return Err("No submission in progress".to_string());
        }
        let outcome = result
            .map_err(|err| err.to_string())
            .and_then(|body| decode_mutation::<F::Record>(body, <F::Record as ListEntity>::RECORD_KEY));

        match outcome {
            Ok(ApiResponse::Success(record)) => {
                *self = Self::new();
                Ok(record)
            }
            Ok(ApiResponse::Failure { message }) => {
                self.phase = ModalPhase::Open;
                self.error = Some(message.clone());
                Err(message)
            }
            Err(message) => {
                self.phase = ModalPhase::Open;
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedClient;
    use crate::shared::api::{ApiClient, Method};
    use crate::shared::list::state::{ListAction, ListEffect, ListState};
    use crate::shared::list::testing::{person, Person};
    use contracts::shared::validation::{FieldSpec, ValidationRules, EMAIL_PATTERN};
    use contracts::shared::ListPayload;
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct PersonForm {
        id: Option<String>,
        name: String,
        email: String,
    }

    impl FormModel for PersonForm {
        type Record = Person;
        const NOUN: &'static str = "person";
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::text("name", "Name", ValidationRules::required().length(2, 40)),
            FieldSpec::text(
                "email",
                "Email",
                ValidationRules::required().pattern(EMAIL_PATTERN, "Enter a valid e-mail"),
            ),
        ];

        fn from_record(record: &Person) -> Self {
            Self {
                id: Some(record.id.clone()),
                name: record.name.clone(),
                email: record.email.clone(),
            }
        }

        fn value(&self, field: &str) -> String {
            match field {
                "name" => self.name.clone(),
                "email" => self.email.clone(),
                _ => String::new(),
            }
        }

        fn set_value(&mut self, field: &str, value: String) {
            match field {
                "name" => self.name = value,
                "email" => self.email = value,
                _ => {}
            }
        }

        fn is_edit(&self) -> bool {
            self.id.is_some()
        }

        fn request(&self, _attachments: &[Attachment]) -> Result<ApiRequest, ApiError> {
            let body = json!({ "name": self.name.trim(), "email": self.email.trim() });
            match &self.id {
                Some(id) => ApiRequest::put(format!("/admin/people/{}", id)).with_json(&body),
                None => ApiRequest::post("/admin/people").with_json(&body),
            }
        }
    }

    fn filled() -> CrudModal<PersonForm> {
        let mut modal = CrudModal::<PersonForm>::new();
        modal.open_create();
        modal.set_field("name", "Dana".to_string());
        modal.set_field("email", "dana@example.com".to_string());
        modal
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let mut modal = CrudModal::<PersonForm>::new();
        modal.open_create();
        modal.set_field("email", "nope".to_string());
        assert!(modal.begin_submit().is_none());
        assert_eq!(modal.phase, ModalPhase::Open);
        assert_eq!(modal.field_errors.get("name"), Some("Name is required"));
        assert_eq!(modal.field_errors.get("email"), Some("Enter a valid e-mail"));
        assert!(modal.error.is_some());
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut modal = CrudModal::<PersonForm>::new();
        modal.open_create();
        modal.begin_submit();
        modal.set_field("name", "Dana".to_string());
        assert_eq!(modal.field_errors.get("name"), None);
        assert!(modal.field_errors.get("email").is_some());
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut modal = filled();
        modal.cancel();
        assert_eq!(modal.phase, ModalPhase::Closed);
        assert_eq!(modal.form, PersonForm::default());
    }

    #[test]
    fn test_create_posts_once_closes_and_refetches_once() {
        let client = ScriptedClient::new().respond(Ok(json!({
            "status": true,
            "data": { "person": { "_id": "new", "name": "Dana", "email": "dana@example.com" } }
        })));
        let mut list = ListState::<Person>::new();
        list.apply(ListAction::FetchSucceeded(ListPayload {
            items: vec![person("1", "Ann")],
            total_pages: 1,
            total_items: None,
        }));

        let mut modal = filled();
        let request = modal.begin_submit().expect("valid form builds a request");
        assert_eq!(modal.phase, ModalPhase::Submitting);
        assert!(modal.begin_submit().is_none());

        let response = block_on(client.send(request));
        let saved = modal.finish(response).unwrap();
        assert_eq!(modal.phase, ModalPhase::Closed);

        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/admin/people");
        assert_eq!(
            sent[0].body.as_json(),
            Some(&json!({ "name": "Dana", "email": "dana@example.com" }))
        );

        // the new record is not on the page, so the list reloads once
        assert_eq!(list.apply(ListAction::RecordSaved(saved)), ListEffect::Refetch);
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_edit_puts_and_patches_in_place() {
        let ann = person("1", "Ann");
        let mut modal = CrudModal::<PersonForm>::new();
        modal.open_edit(&ann);
        assert_eq!(modal.title(), "Edit person");
        modal.set_field("name", "Annie".to_string());
        let request = modal.begin_submit().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/admin/people/1");

        let mut echoed = ann.clone();
        echoed.name = "Annie".to_string();
        let saved = modal
            .finish(Ok(json!({ "status": true, "data": { "person": {
                "_id": "1", "name": "Annie", "email": "ann@example.com", "active": true
            } } })))
            .unwrap();

        let mut list = ListState::<Person>::new();
        list.apply(ListAction::FetchSucceeded(ListPayload {
            items: vec![ann],
            total_pages: 1,
            total_items: None,
        }));
        assert_eq!(list.apply(ListAction::RecordSaved(saved)), ListEffect::None);
        assert_eq!(list.items[0], echoed);
    }

    #[test]
    fn test_server_failure_keeps_modal_open() {
        let mut modal = filled();
        modal.begin_submit().unwrap();
        let result = modal.finish(Ok(json!({ "status": false, "message": "Email already used" })));
        assert_eq!(result, Err("Email already used".to_string()));
        assert_eq!(modal.phase, ModalPhase::Open);
        assert_eq!(modal.error.as_deref(), Some("Email already used"));
        assert_eq!(modal.form.name, "Dana");
    }

    #[test]
    fn test_transport_failure_keeps_modal_open() {
        let mut modal = filled();
        modal.begin_submit().unwrap();
        let result = modal.finish(Err(ApiError::Http {
            status: 502,
            message: "Bad gateway".to_string(),
        }));
        assert!(result.is_err());
        assert_eq!(modal.phase, ModalPhase::Open);
    }
}
