use contracts::domain::a006_ticket::Ticket;
use leptos::prelude::*;

use crate::shared::api::use_api_client;
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_money;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, SortValue, Sortable,
};

impl Sortable for Ticket {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "ticketCode" => (&self.ticket_code).into(),
            "eventName" => (&self.event_name).into(),
            "buyerName" => (&self.buyer_name).into(),
            "quantity" => self.quantity.into(),
            "amount" => self.amount.into(),
            "status" => self.status.as_deref().into(),
            "purchasedAt" => (&self.purchased_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Ticket {
    const KEY: &'static str = "a006_ticket";
    const TITLE: &'static str = "Tickets";
    const ENDPOINT: ListEndpoint = ListEndpoint::post("/admin/tickets/list", "tickets");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("ticketCode", "Code", |t: &Ticket| t.ticket_code.clone()),
        Column::new("eventName", "Event", |t: &Ticket| t.event_name.clone()),
        Column::new("buyerName", "Buyer", |t: &Ticket| t.buyer_name.clone()),
        Column::new("quantity", "Qty", |t: &Ticket| t.quantity.to_string()).kind(CellKind::Number),
        Column::new("amount", "Amount", |t: &Ticket| format_money(t.amount)).kind(CellKind::Money),
        Column::new("status", "Status", |t: &Ticket| t.status.clone().unwrap_or_default())
            .kind(CellKind::Badge),
        Column::new("purchasedAt", "Purchased", |t: &Ticket| t.purchased_at.clone())
            .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |t| t.ticket_code.clone(),
        |t| t.event_name.clone(),
        |t| t.buyer_name.clone(),
        |t| t.buyer_email.clone().unwrap_or_default(),
    ];
    const DATE_FILTER: bool = true;

    fn id(&self) -> &str {
        &self.id
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TicketList() -> impl IntoView {
    let controller =
        ListController::<Ticket>::mount(use_api_client(), use_config().search_debounce_ms);

    view! { <EntityList controller=controller /> }
}
