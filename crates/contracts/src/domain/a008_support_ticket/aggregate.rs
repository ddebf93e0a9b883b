use crate::enums::SupportStatus;
use serde::{Deserialize, Serialize};

/// Customer support request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub message: String,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    pub status: SupportStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}
