use contracts::domain::a005_banner::{Banner, BannerDto};
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

impl Sortable for Banner {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "title" => (&self.title).into(),
            "link" => self.link.as_deref().into(),
            "isActive" => self.is_active.into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Banner {
    const KEY: &'static str = "a005_banner";
    const TITLE: &'static str = "Banners";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/banners", "banners");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("imageUrl", "Image", |b: &Banner| b.image_url.clone())
            .kind(CellKind::Link)
            .unsortable(),
        Column::new("title", "Title", |b: &Banner| b.title.clone()),
        Column::new("link", "Link", |b: &Banner| b.link.clone().unwrap_or_default()).kind(CellKind::Link),
        Column::new("isActive", "Status", |b: &Banner| {
            if b.is_active { "Active" } else { "Hidden" }.to_string()
        })
        .kind(CellKind::Badge),
        Column::new("createdAt", "Created", |b: &Banner| b.created_at.clone().unwrap_or_default())
            .kind(CellKind::Date),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] =
        &[|b| b.title.clone(), |b| b.link.clone().unwrap_or_default()];
    const PAGE_SIZES: &'static [u32] = &[10, 15, 25, 50];
    const RECORD_KEY: Option<&'static str> = Some("banner");
    const ROW_ACTIONS: &'static [RowAction] = &[RowAction::ToggleStatus, RowAction::Delete];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/banners/{}", self.id)))
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        let patched = Banner {
            is_active: !self.is_active,
            ..self.clone()
        };
        let request = ApiRequest::patch(format!("/admin/banners/{}/status", self.id))
            .with_json(&json!({ "isActive": patched.is_active }))
            .ok()?;
        Some((request, patched))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BannerList() -> impl IntoView {
    let client = use_api_client();
    let controller = ListController::<Banner>::mount(client.clone(), use_config().search_debounce_ms);
    let form = CrudViewModel::<BannerDto>::new(client);

    view! {
        <EntityList controller=controller on_create=Callback::new(move |_| form.open_create()) />
        <FormModal
            vm=form
            on_submit_success=Callback::new(move |saved| {
                controller.dispatch(ListAction::RecordSaved(saved))
            })
        />
    }
}
