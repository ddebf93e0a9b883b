//! Top bar: sidebar toggle, brand and the signed-in user.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use contracts::system::Role;
use leptos::prelude::*;

fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "Administrator",
        Some(Role::Manager) => "Manager",
        None => "Guest",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let user_name = session.name.clone().unwrap_or_else(|| "Guest".to_string());

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Ticketing Admin"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="top-header__role">{role_label(session.role)}</span>
                </div>
            </div>
        </header>
    }
}
