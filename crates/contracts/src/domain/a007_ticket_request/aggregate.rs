use crate::enums::RequestStatus;
use serde::{Deserialize, Serialize};

/// Seller request for a ticket allocation, approved or rejected by an admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_name: String,
    pub seller_name: String,
    #[serde(default)]
    pub requested_quantity: u32,
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}
