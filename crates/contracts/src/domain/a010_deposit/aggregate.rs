use serde::{Deserialize, Serialize};

/// Wallet top-up made by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_name: String,
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: String,
}
