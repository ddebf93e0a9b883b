use crate::enums::RequestStatus;
use serde::{Deserialize, Serialize};

/// Seller payout request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub seller_name: String,
    pub amount: f64,
    #[serde(default)]
    pub bank_account: Option<String>,
    pub status: RequestStatus,
    pub requested_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_withdrawal() {
        let raw = r#"{"_id":"w1","sellerName":"Acme","amount":120.5,"status":"pending","requestedAt":"2024-05-01T08:00:00Z"}"#;
        let w: WithdrawalRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(w.status, RequestStatus::Pending);
        assert_eq!(w.bank_account, None);
    }
}
