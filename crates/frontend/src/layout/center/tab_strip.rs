//! Strip of open tabs and the stack of their pages.

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div
            class="tabs__tab"
            class:tabs__tab--active=is_active
            on:click=move |_| ctx.activate_tab(&key_for_click)
        >
            <span class="tabs__title">{tab.title}</span>
            <button class="tabs__close" title="Close" on:click=on_close>"×"</button>
        </div>
    }
}

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tabs__bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabButton tab=tab /> }
            />
        </div>
    }
}

/// Tab strip plus every open page; pages of inactive tabs stay mounted
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tabs">
            <TabStrip />
            <Show when=move || ctx.opened.with(Vec::is_empty)>
                <div class="tabs__empty">"Pick a section in the sidebar"</div>
            </Show>
            <div class="tabs__content">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=ctx /> }
                />
            </div>
        </div>
    }
}
