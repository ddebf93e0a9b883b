use serde::{Deserialize, Serialize};

/// Support ticket state, toggled from the support table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    Open,
    Closed,
}

impl SupportStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SupportStatus::Open => "open",
            SupportStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportStatus::Open => "Open",
            SupportStatus::Closed => "Closed",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SupportStatus::Open => SupportStatus::Closed,
            SupportStatus::Closed => SupportStatus::Open,
        }
    }
}

impl std::fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
