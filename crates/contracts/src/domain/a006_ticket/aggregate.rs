use serde::{Deserialize, Serialize};

/// Sold ticket, read-only in the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    pub ticket_code: String,
    pub event_name: String,
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_email: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: Option<String>,
    pub purchased_at: String,
}
