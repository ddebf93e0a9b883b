use contracts::system::CurrentUser;
use web_sys::window;

/// Key under which the sign-in flow persists the current user
const CURRENT_USER_KEY: &str = "currentUser";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Raw JSON of the persisted user, if any
pub fn get_current_user_raw() -> Option<String> {
    get_local_storage()?.get_item(CURRENT_USER_KEY).ok()?
}

/// Parse the persisted user. Malformed entries are treated as signed out.
pub fn parse_current_user(raw: &str) -> Option<CurrentUser> {
    match serde_json::from_str::<CurrentUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring malformed `{}` entry: {}", CURRENT_USER_KEY, e);
            None
        }
    }
}

/// Read the current user from localStorage
pub fn get_current_user() -> Option<CurrentUser> {
    parse_current_user(&get_current_user_raw()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::Role;

    #[test]
    fn test_parse_current_user() {
        let user = parse_current_user(r#"{"data":{"token":"t-1","role":"admin","name":"Root"}}"#).unwrap();
        assert_eq!(user.data.token, "t-1");
        assert_eq!(user.data.role, Role::Admin);
    }

    #[test]
    fn test_parse_malformed_user() {
        assert!(parse_current_user("{not json").is_none());
        assert!(parse_current_user(r#"{"data":{"role":"admin"}}"#).is_none());
    }
}
