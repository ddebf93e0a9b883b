use contracts::domain::a010_deposit::DepositRecord;
use leptos::prelude::*;

use crate::shared::api::use_api_client;
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_money;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, SortValue, Sortable,
};

impl Sortable for DepositRecord {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "userName" => (&self.user_name).into(),
            "amount" => self.amount.into(),
            "method" => self.method.as_deref().into(),
            "transactionId" => self.transaction_id.as_deref().into(),
            "status" => self.status.as_deref().into(),
            "createdAt" => (&self.created_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for DepositRecord {
    const KEY: &'static str = "a010_deposit";
    const TITLE: &'static str = "Deposits";
    const ENDPOINT: ListEndpoint = ListEndpoint::post("/admin/deposits", "deposits");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("userName", "User", |d: &DepositRecord| d.user_name.clone()),
        Column::new("amount", "Amount", |d: &DepositRecord| format_money(d.amount))
            .kind(CellKind::Money),
        Column::new("method", "Method", |d: &DepositRecord| d.method.clone().unwrap_or_default()),
        Column::new("transactionId", "Transaction", |d: &DepositRecord| {
            d.transaction_id.clone().unwrap_or_default()
        }),
        Column::new("status", "Status", |d: &DepositRecord| d.status.clone().unwrap_or_default())
            .kind(CellKind::Badge),
        Column::new("createdAt", "Date", |d: &DepositRecord| d.created_at.clone())
            .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |d| d.user_name.clone(),
        |d| d.transaction_id.clone().unwrap_or_default(),
        |d| d.method.clone().unwrap_or_default(),
    ];
    const DATE_FILTER: bool = true;

    fn id(&self) -> &str {
        &self.id
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DepositList() -> impl IntoView {
    let controller =
        ListController::<DepositRecord>::mount(use_api_client(), use_config().search_debounce_ms);

    view! { <EntityList controller=controller /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{ListAction, ListEffect, ListState};
    use chrono::NaiveDate;
    use contracts::shared::DateRange;

    #[test]
    fn test_inverted_range_is_refused() {
        let mut state = ListState::<DepositRecord>::new();
        let inverted = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 5, 10),
            NaiveDate::from_ymd_opt(2024, 5, 1),
        );
        assert_eq!(state.apply(ListAction::SetDateRange(inverted)), ListEffect::None);
        assert!(state.date_range.is_empty());
        assert!(state.error.is_some());
    }
}
