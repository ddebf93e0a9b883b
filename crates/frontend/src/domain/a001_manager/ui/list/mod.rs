use contracts::domain::a001_manager::{Manager, ManagerDto};
use leptos::prelude::*;
use serde_json::json;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::crud::{CrudViewModel, FormModal};
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListAction, ListController, ListEndpoint, ListEntity,
    RowAction, SortValue, Sortable,
};

fn active_label(active: bool) -> String {
    if active { "Active" } else { "Inactive" }.to_string()
}

impl Sortable for Manager {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "email" => (&self.email).into(),
            "phone" => self.phone.as_deref().into(),
            "isActive" => self.is_active.into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Manager {
    const KEY: &'static str = "a001_manager";
    const TITLE: &'static str = "Managers";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/managers", "managers");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("name", "Name", |m: &Manager| m.name.clone()),
        Column::new("email", "Email", |m: &Manager| m.email.clone()),
        Column::new("phone", "Phone", |m: &Manager| m.phone.clone().unwrap_or_default()),
        Column::new("isActive", "Status", |m: &Manager| active_label(m.is_active))
            .kind(CellKind::Badge),
        Column::new("createdAt", "Created", |m: &Manager| m.created_at.clone().unwrap_or_default())
            .kind(CellKind::DateTime),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |m| m.name.clone(),
        |m| m.email.clone(),
        |m| m.phone.clone().unwrap_or_default(),
    ];
    const RECORD_KEY: Option<&'static str> = Some("manager");
    const ROW_ACTIONS: &'static [RowAction] =
        &[RowAction::Edit, RowAction::ToggleStatus, RowAction::Delete];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/managers/{}", self.id)))
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        let patched = Manager {
            is_active: !self.is_active,
            ..self.clone()
        };
        let request = ApiRequest::patch(format!("/admin/managers/{}/status", self.id))
            .with_json(&json!({ "isActive": patched.is_active }))
            .ok()?;
        Some((request, patched))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ManagerList() -> impl IntoView {
    let client = use_api_client();
    let controller = ListController::<Manager>::mount(client.clone(), use_config().search_debounce_ms);
    let form = CrudViewModel::<ManagerDto>::new(client);

    view! {
        <EntityList
            controller=controller
            on_create=Callback::new(move |_| form.open_create())
            on_edit=Callback::new(move |manager: Manager| form.open_edit(&manager))
        />
        <FormModal
            vm=form
            on_submit_success=Callback::new(move |saved| {
                controller.dispatch(ListAction::RecordSaved(saved))
            })
        />
    }
}
