use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Sidebar zone; hidden while `left_open` is off
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
