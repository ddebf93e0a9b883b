use contracts::domain::a009_enquiry::EnquiryTicket;
use leptos::prelude::*;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, RowAction,
    SortValue, Sortable,
};

/// Messages are cut to this many characters in the table
const PREVIEW_CHARS: usize = 80;

fn preview(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

impl Sortable for EnquiryTicket {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "email" => (&self.email).into(),
            "phone" => self.phone.as_deref().into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for EnquiryTicket {
    const KEY: &'static str = "a009_enquiry";
    const TITLE: &'static str = "Enquiries";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/enquiries", "userList");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("name", "Name", |e: &EnquiryTicket| e.name.clone()),
        Column::new("email", "Email", |e: &EnquiryTicket| e.email.clone()),
        Column::new("phone", "Phone", |e: &EnquiryTicket| e.phone.clone().unwrap_or_default()),
        Column::new("message", "Message", |e: &EnquiryTicket| preview(&e.message)).unsortable(),
        Column::new("createdAt", "Received", |e: &EnquiryTicket| {
            e.created_at.clone().unwrap_or_default()
        })
        .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |e| e.name.clone(),
        |e| e.email.clone(),
        |e| e.message.clone(),
    ];
    const ROW_ACTIONS: &'static [RowAction] = &[RowAction::Delete];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/enquiries/{}", self.id)))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EnquiryList() -> impl IntoView {
    let controller =
        ListController::<EnquiryTicket>::mount(use_api_client(), use_config().search_debounce_ms);

    view! { <EntityList controller=controller /> }
}
