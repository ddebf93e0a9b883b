//! Record types used by the list tests.

use serde::Deserialize;
use serde_json::json;

use super::entity::{Column, ListEndpoint, ListEntity, SearchMode};
use super::filter::FieldAccessor;
use super::row_actions::RowAction;
use super::sort::{SortValue, Sortable};
use crate::shared::api::{ApiRequest, RequestBody};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub active: bool,
}

pub fn person(id: &str, name: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        age: None,
        active: true,
    }
}

pub fn person_json(id: &str, name: &str) -> serde_json::Value {
    json!({ "_id": id, "name": name, "email": format!("{}@example.com", name.to_lowercase()), "active": true })
}

impl Sortable for Person {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "age" => self.age.into(),
            "active" => self.active.into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Person {
    const KEY: &'static str = "people";
    const TITLE: &'static str = "People";
    const ENDPOINT: ListEndpoint = ListEndpoint::get("/admin/people", "people");
    const COLUMNS: &'static [Column<Self>] = &[Column::new("name", "Name", |p: &Person| p.name.clone())];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[|p| p.name.clone(), |p| p.email.clone()];
    const RECORD_KEY: Option<&'static str> = Some("person");
    const ROW_ACTIONS: &'static [RowAction] = &[
        RowAction::Edit,
        RowAction::Delete,
        RowAction::ToggleStatus,
        RowAction::OpenDetail,
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn delete_request(&self) -> Option<ApiRequest> {
        Some(ApiRequest::delete(format!("/admin/people/{}", self.id)))
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        let mut patched = self.clone();
        patched.active = !self.active;
        let request = ApiRequest::patch(format!("/admin/people/{}/status", self.id))
            .with_body(RequestBody::Json(json!({ "active": patched.active })));
        Some((request, patched))
    }

    fn detail_tab(&self) -> Option<(String, String)> {
        Some((format!("people_{}", self.id), self.name.clone()))
    }
}

/// Server-searched, date-filtered record behind a POST endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Case {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
}

impl Sortable for Case {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "subject" => (&self.subject).into(),
            _ => SortValue::Missing,
        }
    }
}

impl ListEntity for Case {
    const KEY: &'static str = "cases";
    const TITLE: &'static str = "Cases";
    const ENDPOINT: ListEndpoint = ListEndpoint::post("/admin/cases/list", "cases");
    const COLUMNS: &'static [Column<Self>] = &[Column::new("subject", "Subject", |c: &Case| c.subject.clone())];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[|c| c.subject.clone()];
    const SEARCH_MODE: SearchMode = SearchMode::Server;
    const DATE_FILTER: bool = true;
    const PAGE_SIZES: &'static [u32] = &[10, 15, 25, 50];

    fn id(&self) -> &str {
        &self.id
    }
}
