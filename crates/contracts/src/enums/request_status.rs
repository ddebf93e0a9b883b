use serde::{Deserialize, Serialize};

/// Review state of a seller-side request (ticket requests, withdrawals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Wire code, also used in mutation URLs
    pub fn code(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    /// Only pending requests can still be approved or rejected
    pub fn is_final(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&RequestStatus::Approved).unwrap(), "\"approved\"");
        let parsed: RequestStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, RequestStatus::Pending);
        assert_eq!(RequestStatus::from_code("rejected"), Some(RequestStatus::Rejected));
        assert_eq!(RequestStatus::from_code("unknown"), None);
    }
}
