use contracts::domain::a003_event::{Event, EventDto};
use leptos::prelude::*;
use serde_json::json;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::crud::{CrudViewModel, FormModal};
use crate::shared::date_utils::format_money;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListAction, ListController, ListEndpoint, ListEntity,
    RowAction, SortValue, Sortable,
};

impl Sortable for Event {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "category" => self.category.as_deref().into(),
            "venueName" => self.venue_name.as_deref().into(),
            "date" => (&self.date).into(),
            "price" => self.price.into(),
            "status" => self.status.into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Event {
    const KEY: &'static str = "a003_event";
    const TITLE: &'static str = "Events";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/events", "eventData");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("name", "Name", |e: &Event| e.name.clone()),
        Column::new("category", "Category", |e: &Event| e.category.clone().unwrap_or_default()),
        Column::new("venueName", "Venue", |e: &Event| e.venue_name.clone().unwrap_or_default()),
        Column::new("date", "Starts", |e: &Event| e.date.clone()).kind(CellKind::DateTime),
        Column::new("price", "Price", |e: &Event| format_money(e.price)).kind(CellKind::Money),
        Column::new("status", "Status", |e: &Event| {
            if e.status { "Published" } else { "Hidden" }.to_string()
        })
        .kind(CellKind::Badge),
        Column::new("bannerUrl", "Banner", |e: &Event| e.banner_url.clone().unwrap_or_default())
            .kind(CellKind::Link)
            .unsortable(),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |e| e.name.clone(),
        |e| e.category.clone().unwrap_or_default(),
        |e| e.venue_name.clone().unwrap_or_default(),
    ];
    const RECORD_KEY: Option<&'static str> = Some("event");
    const ROW_ACTIONS: &'static [RowAction] =
        &[RowAction::Edit, RowAction::ToggleStatus, RowAction::Delete];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/events/{}", self.id)))
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        let patched = Event {
            status: !self.status,
            ..self.clone()
        };
        let request = ApiRequest::patch(format!("/admin/events/{}/status", self.id))
            .with_json(&json!({ "status": patched.status }))
            .ok()?;
        Some((request, patched))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let client = use_api_client();
    let controller = ListController::<Event>::mount(client.clone(), use_config().search_debounce_ms);
    let form = CrudViewModel::<EventDto>::new(client);

    view! {
        <EntityList
            controller=controller
            on_create=Callback::new(move |_| form.open_create())
            on_edit=Callback::new(move |event: Event| form.open_edit(&event))
        />
        <FormModal
            vm=form
            on_submit_success=Callback::new(move |saved| {
                controller.dispatch(ListAction::RecordSaved(saved))
            })
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{sort_items, SortDirection};

    fn event(id: &str, price: f64, status: bool) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {}", id),
            description: None,
            category: None,
            venue_id: None,
            venue_name: None,
            date: "2024-06-01T19:00:00Z".to_string(),
            price,
            banner_url: None,
            status,
        }
    }

    #[test]
    fn test_price_sorts_numerically() {
        let rows = vec![event("a", 100.0, true), event("b", 9.5, true), event("c", 25.0, true)];
        let ids: Vec<String> = sort_items(rows, "price", SortDirection::Descending)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_toggle_publishes_hidden_event() {
        let (request, patched) = event("e1", 10.0, false).toggle_request().unwrap();
        assert_eq!(request.path, "/admin/events/e1/status");
        assert!(patched.status);
    }
}
