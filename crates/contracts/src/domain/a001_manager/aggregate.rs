use serde::{Deserialize, Serialize};

/// Platform manager account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create / edit form payload. `id` is set only in edit mode,
/// `password` only on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&Manager> for ManagerDto {
    fn from(m: &Manager) -> Self {
        Self {
            id: Some(m.id.clone()),
            name: m.name.clone(),
            email: m.email.clone(),
            phone: m.phone.clone().unwrap_or_default(),
            password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_wire_names() {
        let raw = r#"{"_id":"m1","name":"Ann","email":"ann@x.io","isActive":true,"createdAt":"2024-03-15T10:00:00Z"}"#;
        let m: Manager = serde_json::from_str(raw).unwrap();
        assert_eq!(m.id, "m1");
        assert!(m.is_active);
        assert_eq!(m.phone, None);
    }

    #[test]
    fn test_edit_dto_omits_password() {
        let m = Manager {
            id: "m1".into(),
            name: "Ann".into(),
            email: "ann@x.io".into(),
            phone: None,
            is_active: true,
            created_at: None,
        };
        let json = serde_json::to_value(ManagerDto::from(&m)).unwrap();
        assert_eq!(json["id"], "m1");
        assert!(json.get("password").is_none());
    }
}
