use contracts::domain::a011_withdrawal::WithdrawalRequest;
use contracts::enums::RequestStatus;
use leptos::prelude::*;
use serde_json::json;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_money;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, RowAction,
    SortValue, Sortable,
};

impl Sortable for WithdrawalRequest {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "sellerName" => (&self.seller_name).into(),
            "amount" => self.amount.into(),
            "bankAccount" => self.bank_account.as_deref().into(),
            "status" => self.status.code().into(),
            "requestedAt" => (&self.requested_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for WithdrawalRequest {
    const KEY: &'static str = "a011_withdrawal";
    const TITLE: &'static str = "Withdrawals";
    const ENDPOINT: ListEndpoint = ListEndpoint::post("/admin/withdrawals", "withdrawals");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("sellerName", "Seller", |w: &WithdrawalRequest| w.seller_name.clone()),
        Column::new("amount", "Amount", |w: &WithdrawalRequest| format_money(w.amount))
            .kind(CellKind::Money),
        Column::new("bankAccount", "Account", |w: &WithdrawalRequest| {
            w.bank_account.clone().unwrap_or_default()
        }),
        Column::new("status", "Status", |w: &WithdrawalRequest| {
            w.status.display_name().to_string()
        })
        .kind(CellKind::Badge),
        Column::new("requestedAt", "Requested", |w: &WithdrawalRequest| w.requested_at.clone())
            .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |w| w.seller_name.clone(),
        |w| w.bank_account.clone().unwrap_or_default(),
        |w| w.status.display_name().to_string(),
    ];
    const DATE_FILTER: bool = true;
    const RECORD_KEY: Option<&'static str> = Some("withdrawal");
    const ROW_ACTIONS: &'static [RowAction] = &[RowAction::Approve, RowAction::Reject];

    fn id(&self) -> &str {
        &self.id
    }

    fn review_request(&self, status: RequestStatus) -> Option<(ApiRequest, Self)> {
        if self.status.is_final() {
            return None;
        }
        let request = ApiRequest::patch(format!("/admin/withdrawals/{}", self.id))
            .with_json(&json!({ "status": status }))
            .ok()?;
        Some((
            request,
            WithdrawalRequest {
                status,
                ..self.clone()
            },
        ))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WithdrawalList() -> impl IntoView {
    let controller = ListController::<WithdrawalRequest>::mount(
        use_api_client(),
        use_config().search_debounce_ms,
    );

    view! { <EntityList controller=controller /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedClient;
    use crate::shared::api::{ApiClient, ApiError};
    use crate::shared::list::{ListAction, ListState, RowActionDispatcher, RowRoute};
    use contracts::shared::ListPayload;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn withdrawal(id: &str) -> WithdrawalRequest {
        WithdrawalRequest {
            id: id.to_string(),
            seller_name: "Acme".to_string(),
            amount: 120.5,
            bank_account: None,
            status: RequestStatus::Pending,
            requested_at: "2024-05-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_failed_reject_keeps_pending() {
        let client = Rc::new(ScriptedClient::new().respond(Err(ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        })));
        let dyn_client: Rc<dyn ApiClient> = client.clone();
        let dispatcher = RowActionDispatcher::<WithdrawalRequest>::new(dyn_client);

        let mut state = ListState::<WithdrawalRequest>::new();
        state.apply(ListAction::FetchSucceeded(ListPayload {
            items: vec![withdrawal("w1")],
            total_pages: 1,
            total_items: Some(1),
        }));

        let RowRoute::Mutate(mutation) =
            RowActionDispatcher::<WithdrawalRequest>::route(RowAction::Reject, &state.items[0])
        else {
            panic!("reject should mutate");
        };
        let action = block_on(dispatcher.execute(mutation));
        state.apply(action);

        assert_eq!(client.request_count(), 1);
        assert_eq!(state.items[0].status, RequestStatus::Pending);
        assert!(state.action_error.is_some());
    }

    #[test]
    fn test_approved_withdrawal_offers_no_review() {
        let approved = WithdrawalRequest {
            status: RequestStatus::Approved,
            ..withdrawal("w2")
        };
        assert!(RowActionDispatcher::<WithdrawalRequest>::available(&approved).is_empty());
        assert_eq!(
            RowActionDispatcher::<WithdrawalRequest>::available(&withdrawal("w1")).len(),
            2
        );
    }
}
