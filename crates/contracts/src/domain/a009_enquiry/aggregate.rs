use serde::{Deserialize, Serialize};

/// Contact-form enquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryTicket {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
