use contracts::domain::a002_seller::Seller;
use leptos::prelude::*;
use serde_json::json;

use crate::shared::api::{use_api_client, ApiRequest};
use crate::shared::components::EntityList;
use crate::shared::config::use_config;
use crate::shared::list::{
    CellKind, Column, FieldAccessor, ListController, ListEndpoint, ListEntity, RowAction,
    SortValue, Sortable,
};

/// Tab key prefix of the seller detail view
pub const DETAIL_PREFIX: &str = "a002_seller_detail_";

impl Sortable for Seller {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "businessName" => self.business_name.as_deref().into(),
            "email" => (&self.email).into(),
            "phone" => self.phone.as_deref().into(),
            "totalEvents" => self.total_events.into(),
            "isActive" => self.is_active.into(),
            "createdAt" => self.created_at.as_deref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Seller {
    const KEY: &'static str = "a002_seller";
    const TITLE: &'static str = "Sellers";
    const ENDPOINT: ListEndpoint = ListEndpoint::post("/admin/sellers/list", "sellers");
    const COLUMNS: &'static [Column<Self>] = &[
        Column::new("name", "Name", |s: &Seller| s.name.clone()),
        Column::new("businessName", "Business", |s: &Seller| {
            s.business_name.clone().unwrap_or_default()
        }),
        Column::new("email", "Email", |s: &Seller| s.email.clone()),
        Column::new("phone", "Phone", |s: &Seller| s.phone.clone().unwrap_or_default()),
        Column::new("totalEvents", "Events", |s: &Seller| {
            s.total_events.map(|n| n.to_string()).unwrap_or_default()
        })
        .kind(CellKind::Number),
        Column::new("isActive", "Status", |s: &Seller| {
            if s.is_active { "Active" } else { "Inactive" }.to_string()
        })
        .kind(CellKind::Badge),
        Column::new("createdAt", "Joined", |s: &Seller| s.created_at.clone().unwrap_or_default())
            .kind(CellKind::Date),
    ];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[
        |s| s.name.clone(),
        |s| s.email.clone(),
        |s| s.business_name.clone().unwrap_or_default(),
        |s| s.phone.clone().unwrap_or_default(),
    ];
    const RECORD_KEY: Option<&'static str> = Some("seller");
    const ROW_ACTIONS: &'static [RowAction] =
        &[RowAction::OpenDetail, RowAction::ToggleStatus, RowAction::Delete];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/sellers/{}", self.id)))
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        let patched = Seller {
            is_active: !self.is_active,
            ..self.clone()
        };
        let request = ApiRequest::patch(format!("/admin/sellers/{}/status", self.id))
            .with_json(&json!({ "isActive": patched.is_active }))
            .ok()?;
        Some((request, patched))
    }

    fn detail_tab(&self) -> Option<(String, String)> {
        Some((format!("{}{}", DETAIL_PREFIX, self.id), self.name.clone()))
    }
}

/// Counts over the rows currently shown in the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SellerSummary {
    pub shown: usize,
    pub active: usize,
    pub events: u32,
}

impl SellerSummary {
    pub fn from_rows(rows: &[Seller]) -> Self {
        Self {
            shown: rows.len(),
            active: rows.iter().filter(|s| s.is_active).count(),
            events: rows.iter().filter_map(|s| s.total_events).sum(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SellerList() -> impl IntoView {
    let controller =
        ListController::<Seller>::mount(use_api_client(), use_config().search_debounce_ms);
    let summary = RwSignal::new(SellerSummary::default());

    view! {
        <EntityList
            controller=controller
            on_filtered_change=Callback::new(move |rows: Vec<Seller>| {
                summary.set(SellerSummary::from_rows(&rows))
            })
        />
        <div class="table-summary">
            {move || {
                let s = summary.get();
                format!("{} shown, {} active, {} events", s.shown, s.active, s.events)
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_items, RowActionDispatcher, RowRoute};

    fn seller(id: &str, name: &str, active: bool, events: Option<u32>) -> Seller {
        Seller {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@shop.io", id),
            phone: None,
            business_name: None,
            is_active: active,
            total_events: events,
            created_at: None,
        }
    }

    #[test]
    fn test_summary_counts_shown_rows() {
        let rows = vec![
            seller("s1", "Acme", true, Some(3)),
            seller("s2", "Bolt", false, None),
            seller("s3", "Cine", true, Some(2)),
        ];
        let shown = filter_items(&rows, "c", Seller::SEARCH_FIELDS);
        assert_eq!(
            SellerSummary::from_rows(&shown),
            SellerSummary { shown: 2, active: 2, events: 5 }
        );
    }

    #[test]
    fn test_view_opens_detail_tab() {
        let route = RowActionDispatcher::<Seller>::route(RowAction::OpenDetail, &seller("s9", "Acme", true, None));
        match route {
            RowRoute::Navigate { key, title } => {
                assert_eq!(key, "a002_seller_detail_s9");
                assert_eq!(title, "Acme");
            }
            other => panic!("unexpected route {:?}", other),
        }
    }
}
