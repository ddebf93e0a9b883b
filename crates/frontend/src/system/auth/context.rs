use contracts::system::{CurrentUser, Role};
use leptos::prelude::*;

use super::storage;

/// Read-only view of the signed-in user, injected into the transport
/// and every screen that needs the role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Option<Role>,
    pub name: Option<String>,
}

impl Session {
    pub fn from_user(user: CurrentUser) -> Self {
        Self {
            token: user.data.token,
            role: Some(user.data.role),
            name: user.data.name,
        }
    }

    /// Session restored from localStorage, or an anonymous one
    pub fn from_storage() -> Self {
        storage::get_current_user()
            .map(Self::from_user)
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Value of the `Authorization` header
    pub fn bearer(&self) -> Option<String> {
        self.is_authenticated()
            .then(|| format!("Bearer {}", self.token.trim()))
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = Session::from_storage();
    if session.is_authenticated() {
        log::debug!("Session restored, role {:?}", session.role);
    } else {
        log::warn!("No stored session; API calls will be rejected");
    }
    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
