use serde::{Deserialize, Serialize};

/// Seller (organizer) registered on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_events: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}
