use serde::{Deserialize, Serialize};

/// Event or movie screening listed for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    /// ISO 8601 start date-time
    pub date: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub banner_url: Option<String>,
    /// Published flag, toggled from the events table
    #[serde(default)]
    pub status: bool,
}

/// Create / edit form payload, sent as multipart together with the banner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub venue_id: String,
    pub date: String,
    pub price: String,
}

impl From<&Event> for EventDto {
    fn from(e: &Event) -> Self {
        Self {
            id: Some(e.id.clone()),
            name: e.name.clone(),
            description: e.description.clone().unwrap_or_default(),
            category: e.category.clone().unwrap_or_default(),
            venue_id: e.venue_id.clone().unwrap_or_default(),
            date: e.date.clone(),
            price: e.price.to_string(),
        }
    }
}
