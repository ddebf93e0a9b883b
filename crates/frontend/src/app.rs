use crate::layout::center::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::api::{provide_api_client, HttpClient};
use crate::shared::config::{use_config, AppConfig};
use crate::system::auth::{use_session, SessionProvider};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::ConfigProvider;

#[component]
fn SignedOut() -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error">
            <span class="warning-box__icon">"⚠"</span>
            <span class="warning-box__text">
                "You are not signed in. Sign in through the admin portal and reload this page."
            </span>
        </div>
    }
}

/// Session-dependent part of the tree: transport, tabs and the shell
#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let signed_in = session.is_authenticated();

    provide_api_client(Rc::new(HttpClient::new(config.api_base.clone(), session)));
    provide_context(AppGlobalContext::new());

    if !signed_in {
        return view! { <SignedOut /> }.into_any();
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
    .into_any()
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("API base: {}", config.api_base);
    provide_context(config);

    view! {
        <ConfigProvider>
            <SessionProvider>
                <MainLayout />
            </SessionProvider>
        </ConfigProvider>
    }
}
