//! Row-level actions: routing a click to an editor, a detail tab or a
//! server mutation, and turning the mutation result into a list action.

use contracts::enums::RequestStatus;
use contracts::shared::{decode_mutation, ApiResponse};
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use super::entity::ListEntity;
use super::state::ListAction;
use crate::shared::api::{ApiClient, ApiRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    ToggleStatus,
    Approve,
    Reject,
    OpenDetail,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::ToggleStatus => "Toggle status",
            RowAction::Approve => "Approve",
            RowAction::Reject => "Reject",
            RowAction::OpenDetail => "View",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::ToggleStatus => "toggle",
            RowAction::Approve => "check",
            RowAction::Reject => "x",
            RowAction::OpenDetail => "eye",
        }
    }

    /// Browser confirmation text, for actions that cannot be undone
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            RowAction::Delete => Some("Delete this record? This cannot be undone."),
            RowAction::Approve => Some("Approve this request?"),
            RowAction::Reject => Some("Reject this request?"),
            _ => None,
        }
    }
}

/// What happens to the list once the server confirms
#[derive(Debug, Clone, PartialEq)]
pub enum MutationEffect<T> {
    Remove,
    /// Locally patched row, used when the server does not echo the record
    Replace(T),
}

#[derive(Debug, Clone)]
pub struct PendingMutation<T> {
    pub action: RowAction,
    pub item_id: String,
    pub request: ApiRequest,
    pub effect: MutationEffect<T>,
}

#[derive(Debug, Clone)]
pub enum RowRoute<T> {
    OpenEditor(T),
    Navigate { key: String, title: String },
    Mutate(PendingMutation<T>),
    Unsupported,
}

pub struct RowActionDispatcher<T> {
    client: Rc<dyn ApiClient>,
    _rows: PhantomData<T>,
}

impl<T: ListEntity> RowActionDispatcher<T> {
    pub fn new(client: Rc<dyn ApiClient>) -> Self {
        Self {
            client,
            _rows: PhantomData,
        }
    }

    /// Actions `item` currently offers; reviewed requests lose Approve/Reject
    pub fn available(item: &T) -> Vec<RowAction> {
        T::ROW_ACTIONS
            .iter()
            .copied()
            .filter(|&action| !matches!(Self::route(action, item), RowRoute::Unsupported))
            .collect()
    }

    /// Decide what a click on `action` for `item` does. Nothing is sent yet.
    pub fn route(action: RowAction, item: &T) -> RowRoute<T> {
        if !T::ROW_ACTIONS.contains(&action) {
            return RowRoute::Unsupported;
        }
        let item_id = item.id().to_string();
        let mutate = |request: ApiRequest, effect: MutationEffect<T>| {
            RowRoute::Mutate(PendingMutation {
                action,
                item_id: item_id.clone(),
                request,
                effect,
            })
        };

        match action {
            RowAction::Edit => RowRoute::OpenEditor(item.clone()),
            RowAction::OpenDetail => match item.detail_tab() {
                Some((key, title)) => RowRoute::Navigate { key, title },
                None => RowRoute::Unsupported,
            },
            RowAction::Delete => match item.delete_request() {
                Some(request) => mutate(request, MutationEffect::Remove),
                None => RowRoute::Unsupported,
            },
            RowAction::ToggleStatus => match item.toggle_request() {
                Some((request, patched)) => mutate(request, MutationEffect::Replace(patched)),
                None => RowRoute::Unsupported,
            },
            RowAction::Approve | RowAction::Reject => {
                let status = if action == RowAction::Approve {
                    RequestStatus::Approved
                } else {
                    RequestStatus::Rejected
                };
                match item.review_request(status) {
                    Some((request, patched)) => mutate(request, MutationEffect::Replace(patched)),
                    None => RowRoute::Unsupported,
                }
            }
        }
    }

    /// Send the mutation. The list only changes when the server confirms;
    /// failures come back as [`ListAction::ActionFailed`] and are not retried.
    pub fn execute(&self, mutation: PendingMutation<T>) -> impl Future<Output = ListAction<T>> + 'static {
        let PendingMutation {
            action,
            item_id,
            request,
            effect,
        } = mutation;
        let client = Rc::clone(&self.client);

        async move {
            let body = match client.send(request).await {
                Ok(body) => body,
                Err(err) => {
                    log::error!("{}: {} of {} failed: {}", T::KEY, action.label(), item_id, err);
                    return ListAction::ActionFailed(format!("{} failed: {}", action.label(), err));
                }
            };

            match decode_mutation::<T>(body, T::RECORD_KEY) {
                Ok(ApiResponse::Success(echoed)) => {
                    log::debug!("{}: {} of {} confirmed", T::KEY, action.label(), item_id);
                    match effect {
                        MutationEffect::Remove => ListAction::ItemRemoved(item_id),
                        MutationEffect::Replace(local) => {
                            let record = echoed
                                .filter(|record| record.id() == item_id)
                                .unwrap_or(local);
                            ListAction::ItemPatched(record)
                        }
                    }
                }
                Ok(ApiResponse::Failure { message }) => {
                    log::warn!("{}: {} of {} rejected: {}", T::KEY, action.label(), item_id, message);
                    ListAction::ActionFailed(message)
                }
                Err(shape) => {
                    log::error!("{}: {}", T::KEY, shape);
                    ListAction::ActionFailed(shape)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedClient;
    use crate::shared::api::{ApiError, Method};
    use crate::shared::list::state::{ListEffect, ListState};
    use crate::shared::list::testing::{person, Case, Person};
    use contracts::shared::ListPayload;
    use futures::executor::block_on;
    use serde_json::json;

    fn dispatcher(client: &Rc<ScriptedClient>) -> RowActionDispatcher<Person> {
        let client: Rc<dyn ApiClient> = client.clone();
        RowActionDispatcher::new(client)
    }

    fn state_with(items: Vec<Person>) -> ListState<Person> {
        let mut state = ListState::new();
        state.apply(ListAction::FetchSucceeded(ListPayload {
            items,
            total_pages: 1,
            total_items: None,
        }));
        state
    }

    fn pending(action: RowAction, item: &Person) -> PendingMutation<Person> {
        match RowActionDispatcher::<Person>::route(action, item) {
            RowRoute::Mutate(mutation) => mutation,
            other => panic!("expected a mutation, got {:?}", other),
        }
    }

    #[test]
    fn test_routes() {
        let ann = person("1", "Ann");
        assert!(matches!(
            RowActionDispatcher::<Person>::route(RowAction::Edit, &ann),
            RowRoute::OpenEditor(p) if p == ann
        ));
        assert!(matches!(
            RowActionDispatcher::<Person>::route(RowAction::OpenDetail, &ann),
            RowRoute::Navigate { key, .. } if key == "people_1"
        ));
        assert!(matches!(
            RowActionDispatcher::<Person>::route(RowAction::Approve, &ann),
            RowRoute::Unsupported
        ));
        let case = Case { id: "c".to_string(), subject: "s".to_string() };
        assert!(matches!(
            RowActionDispatcher::<Case>::route(RowAction::Delete, &case),
            RowRoute::Unsupported
        ));
    }

    #[test]
    fn test_toggle_patches_after_confirmation() {
        let ann = person("1", "Ann");
        let client = Rc::new(ScriptedClient::new().respond(Ok(json!({ "status": true }))));
        let action = block_on(dispatcher(&client).execute(pending(RowAction::ToggleStatus, &ann)));

        let mut state = state_with(vec![ann]);
        assert_eq!(state.apply(action), ListEffect::None);
        assert!(!state.items[0].active);

        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Patch);
        assert_eq!(sent[0].body.as_json(), Some(&json!({ "active": false })));
    }

    #[test]
    fn test_echoed_record_wins_over_local_patch() {
        let ann = person("1", "Ann");
        let echoed = json!({
            "status": true,
            "data": { "person": { "_id": "1", "name": "Ann B.", "email": "ann@example.com", "active": false } }
        });
        let client = Rc::new(ScriptedClient::new().respond(Ok(echoed)));
        let action = block_on(dispatcher(&client).execute(pending(RowAction::ToggleStatus, &ann)));
        match action {
            ListAction::ItemPatched(record) => assert_eq!(record.name, "Ann B."),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_failed_toggle_leaves_value_unchanged() {
        let ann = person("1", "Ann");
        let client = Rc::new(ScriptedClient::new().respond(Err(ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        })));
        let action = block_on(dispatcher(&client).execute(pending(RowAction::ToggleStatus, &ann)));

        let mut state = state_with(vec![ann.clone()]);
        state.apply(action);
        assert_eq!(state.items[0].active, ann.active);
        assert!(state.action_error.is_some());
    }

    #[test]
    fn test_rejected_toggle_leaves_value_unchanged() {
        let ann = person("1", "Ann");
        let client = Rc::new(
            ScriptedClient::new().respond(Ok(json!({ "status": false, "message": "Not allowed" }))),
        );
        let action = block_on(dispatcher(&client).execute(pending(RowAction::ToggleStatus, &ann)));
        assert_eq!(action, ListAction::ActionFailed("Not allowed".to_string()));
    }

    #[test]
    fn test_delete_removes_row_on_success() {
        let items: Vec<Person> = ["a", "b", "x", "c", "d"].iter().map(|id| person(id, id)).collect();
        let target = items[2].clone();
        let client = Rc::new(ScriptedClient::new().respond(Ok(json!({ "status": true, "message": "Deleted" }))));
        let action = block_on(dispatcher(&client).execute(pending(RowAction::Delete, &target)));

        let mut state = state_with(items);
        state.apply(action);
        assert_eq!(state.items.len(), 4);
        assert!(state.items.iter().all(|p| p.id != "x"));
        assert_eq!(client.requests()[0].path, "/admin/people/x");
    }

    #[test]
    fn test_failed_delete_keeps_list() {
        let items: Vec<Person> = ["a", "x"].iter().map(|id| person(id, id)).collect();
        let client = Rc::new(ScriptedClient::new().respond(Err(ApiError::Transport("offline".to_string()))));
        let action = block_on(dispatcher(&client).execute(pending(RowAction::Delete, &items[1])));

        let mut state = state_with(items.clone());
        state.apply(action);
        assert_eq!(state.items, items);
    }
}
