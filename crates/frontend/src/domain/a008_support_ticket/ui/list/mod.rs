use contracts::domain::a008_support_ticket::SupportTicket;
use leptos::prelude::*;
use serde_json::json;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, RowAction,
    SearchMode, SortValue, Sortable,
};

/// Tab key prefix of the support ticket detail view
pub const DETAIL_PREFIX: &str = "a008_support_ticket_detail_";

impl Sortable for SupportTicket {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "subject" => (&self.subject).into(),
            "userName" => (&self.user_name).into(),
            "userEmail" => self.user_email.as_deref().into(),
            "status" => self.status.code().into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for SupportTicket {
    const KEY: &'static str = "a008_support_ticket";
    const TITLE: &'static str = "Support";
    const ENDPOINT: ListEndpoint = ListEndpoint::post("/admin/support/list", "supportReq");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("subject", "Subject", |t: &SupportTicket| t.subject.clone()),
        Column::new("userName", "User", |t: &SupportTicket| t.user_name.clone()),
        Column::new("userEmail", "Email", |t: &SupportTicket| {
            t.user_email.clone().unwrap_or_default()
        }),
        Column::new("status", "Status", |t: &SupportTicket| t.status.display_name().to_string())
            .kind(CellKind::Badge),
        Column::new("createdAt", "Opened", |t: &SupportTicket| {
            t.created_at.clone().unwrap_or_default()
        })
        .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] =
        &[|t| t.subject.clone(), |t| t.user_name.clone()];
    const SEARCH_MODE: SearchMode = SearchMode::Server;
    const RECORD_KEY: Option<&'static str> = Some("ticket");
    const ROW_ACTIONS: &'static [RowAction] = &[RowAction::OpenDetail, RowAction::ToggleStatus];

    fn id(&self) -> &str {
        &self.id
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        let patched = SupportTicket {
            status: self.status.toggled(),
            ..self.clone()
        };
        let request = ApiRequest::patch(format!("/admin/support/{}/status", self.id))
            .with_json(&json!({ "status": patched.status }))
            .ok()?;
        Some((request, patched))
    }

    fn detail_tab(&self) -> Option<(String, String)> {
        Some((format!("{}{}", DETAIL_PREFIX, self.id), self.subject.clone()))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupportTicketList() -> impl IntoView {
    let controller =
        ListController::<SupportTicket>::mount(use_api_client(), use_config().search_debounce_ms);

    view! { <EntityList controller=controller /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::RequestBody;
    use crate::shared::list::{ListAction, ListEffect, ListState};
    use contracts::enums::SupportStatus;
    use contracts::shared::ListPayload;

    fn ticket(id: &str, subject: &str) -> SupportTicket {
        SupportTicket {
            id: id.to_string(),
            subject: subject.to_string(),
            message: "Please help".to_string(),
            user_name: "Dana".to_string(),
            user_email: None,
            status: SupportStatus::Open,
            created_at: None,
        }
    }

    #[test]
    fn test_search_is_debounced_to_the_server() {
        let mut state = ListState::<SupportTicket>::new();
        state.apply(ListAction::FetchSucceeded(ListPayload {
            items: vec![ticket("t1", "Refund"), ticket("t2", "Login")],
            total_pages: 3,
            total_items: None,
        }));
        state.apply(ListAction::GoToPage(2));

        assert_eq!(
            state.apply(ListAction::SetSearch("refund".to_string())),
            ListEffect::DebouncedRefetch
        );
        assert_eq!(state.page, 1);
        // rows are not filtered locally in server mode
        assert_eq!(state.visible_items().len(), 2);

        let request = SupportTicket::ENDPOINT.request(&state.query()).unwrap();
        assert_eq!(request.path_and_query(), "/admin/support/list?page=1&limit=15");
        match request.body {
            RequestBody::Json(body) => assert_eq!(body, json!({ "search": "refund" })),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_toggle_closes_open_ticket() {
        let (request, patched) = ticket("t1", "Refund").toggle_request().unwrap();
        assert_eq!(patched.status, SupportStatus::Closed);
        assert_eq!(request.body.as_json(), Some(&json!({ "status": "closed" })));
    }
}
