use serde::{Deserialize, Serialize};

/// Role of the signed-in dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
}

/// Persisted current user, `{ data: { token, role, name } }` in storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub data: CurrentUserData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserData {
    pub token: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_user() {
        let raw = r#"{"data":{"token":"abc","role":"manager"}}"#;
        let user: CurrentUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.data.token, "abc");
        assert_eq!(user.data.role, Role::Manager);
        assert_eq!(user.data.name, None);
    }
}
