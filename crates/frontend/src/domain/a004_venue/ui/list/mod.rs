use contracts::domain::a004_venue::{Venue, VenueDto};
use leptos::prelude::*;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::crud::{CrudViewModel, FormModal};
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListAction, ListController, ListEndpoint, ListEntity,
    RowAction, SortValue, Sortable,
};

impl Sortable for Venue {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "city" => (&self.city).into(),
            "address" => (&self.address).into(),
            "capacity" => self.capacity.into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Venue {
    const KEY: &'static str = "a004_venue";
    const TITLE: &'static str = "Venues";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/venues", "venues");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("name", "Name", |v: &Venue| v.name.clone()),
        Column::new("city", "City", |v: &Venue| v.city.clone()),
        Column::new("address", "Address", |v: &Venue| v.address.clone()),
        Column::new("capacity", "Capacity", |v: &Venue| v.capacity.to_string())
            .kind(CellKind::Number),
        Column::new("createdAt", "Created", |v: &Venue| v.created_at.clone().unwrap_or_default())
            .kind(CellKind::Date),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] =
        &[|v| v.name.clone(), |v| v.city.clone(), |v| v.address.clone()];
    const RECORD_KEY: Option<&'static str> = Some("venue");
    const ROW_ACTIONS: &'static [RowAction] = &[RowAction::Edit, RowAction::Delete];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/venues/{}", self.id)))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VenueList() -> impl IntoView {
    let client = use_api_client();
    let controller = ListController::<Venue>::mount(client.clone(), use_config().search_debounce_ms);
    let form = CrudViewModel::<VenueDto>::new(client);

    view! {
        <EntityList
            controller=controller
            on_create=Callback::new(move |_| form.open_create())
            on_edit=Callback::new(move |venue: Venue| form.open_edit(&venue))
        />
        <FormModal
            vm=form
            on_submit_success=Callback::new(move |saved| {
                controller.dispatch(ListAction::RecordSaved(saved))
            })
        />
    }
}
