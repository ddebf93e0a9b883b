use contracts::domain::a007_ticket_request::TicketRequest;
use contracts::enums::RequestStatus;
use leptos::prelude::*;
use serde_json::json;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, RowAction,
    SortValue, Sortable,
};

impl Sortable for TicketRequest {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "eventName" => (&self.event_name).into(),
            "sellerName" => (&self.seller_name).into(),
            "requestedQuantity" => self.requested_quantity.into(),
            "status" => self.status.code().into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for TicketRequest {
    const KEY: &'static str = "a007_ticket_request";
    const TITLE: &'static str = "Ticket requests";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/ticket-requests", "ticketRequests");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("eventName", "Event", |r: &TicketRequest| r.event_name.clone()),
        Column::new("sellerName", "Seller", |r: &TicketRequest| r.seller_name.clone()),
        Column::new("requestedQuantity", "Quantity", |r: &TicketRequest| {
            r.requested_quantity.to_string()
        })
        .kind(CellKind::Number),
        Column::new("status", "Status", |r: &TicketRequest| r.status.display_name().to_string())
            .kind(CellKind::Badge),
        Column::new("createdAt", "Requested", |r: &TicketRequest| {
            r.created_at.clone().unwrap_or_default()
        })
        .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |r| r.event_name.clone(),
        |r| r.seller_name.clone(),
        |r| r.status.display_name().to_string(),
    ];
    const RECORD_KEY: Option<&'static str> = Some("ticketRequest");
    const ROW_ACTIONS: &'static [RowAction] = &[RowAction::Approve, RowAction::Reject];

    fn id(&self) -> &str {
        &self.id
    }

    /// Only pending requests can be reviewed
    fn review_request(&self, status: RequestStatus) -> Option<(ApiRequest, Self)> {
        if self.status.is_final() {
            return None;
        }
        let request = ApiRequest::patch(format!("/admin/ticket-requests/{}", self.id))
            .with_json(&json!({ "status": status }))
            .ok()?;
        Some((
            request,
            TicketRequest {
                status,
                ..self.clone()
            },
        ))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TicketRequestList() -> impl IntoView {
    let controller =
        ListController::<TicketRequest>::mount(use_api_client(), use_config().search_debounce_ms);

    view! { <EntityList controller=controller /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedClient;
    use crate::shared::api::ApiClient;
    use crate::shared::list::{ListAction, ListState, RowActionDispatcher, RowRoute};
    use contracts::shared::ListPayload;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn request(id: &str, status: RequestStatus) -> TicketRequest {
        TicketRequest {
            id: id.to_string(),
            event_name: "Gala".to_string(),
            seller_name: "Acme".to_string(),
            requested_quantity: 40,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_approve_patches_status_after_confirmation() {
        let client = Rc::new(ScriptedClient::new().respond(Ok(json!({ "status": true }))));
        let dyn_client: Rc<dyn ApiClient> = client.clone();
        let dispatcher = RowActionDispatcher::<TicketRequest>::new(dyn_client);

        let RowRoute::Mutate(mutation) =
            RowActionDispatcher::<TicketRequest>::route(RowAction::Approve, &request("r1", RequestStatus::Pending))
        else {
            panic!("approve should mutate");
        };
        let action = block_on(dispatcher.execute(mutation));

        let sent = client.requests();
        assert_eq!(sent[0].path, "/admin/ticket-requests/r1");
        assert_eq!(sent[0].body.as_json(), Some(&json!({ "status": "approved" })));

        let mut state = ListState::<TicketRequest>::new();
        state.apply(ListAction::FetchSucceeded(ListPayload {
            items: vec![request("r1", RequestStatus::Pending)],
            total_pages: 1,
            total_items: None,
        }));
        state.apply(action);
        assert_eq!(state.items[0].status, RequestStatus::Approved);
    }

    #[test]
    fn test_reviewed_request_cannot_be_reviewed_again() {
        let route = RowActionDispatcher::<TicketRequest>::route(
            RowAction::Reject,
            &request("r2", RequestStatus::Approved),
        );
        assert!(matches!(route, RowRoute::Unsupported));
    }

    #[test]
    fn test_review_buttons_only_for_pending() {
        assert_eq!(
            RowActionDispatcher::<TicketRequest>::available(&request("r1", RequestStatus::Pending)),
            vec![RowAction::Approve, RowAction::Reject]
        );
        assert!(
            RowActionDispatcher::<TicketRequest>::available(&request("r2", RequestStatus::Rejected))
                .is_empty()
        );
    }
}
