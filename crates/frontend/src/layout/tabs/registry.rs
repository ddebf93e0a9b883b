//! Tab key to view. Every screen the shell can open is listed here.

use crate::domain::a001_manager::ui::list::ManagerList;
use crate::domain::a002_seller::ui::details::SellerDetails;
use crate::domain::a002_seller::ui::list::{SellerList, DETAIL_PREFIX as SELLER_DETAIL};
use crate::domain::a003_event::ui::list::EventList;
use crate::domain::a004_venue::ui::list::VenueList;
use crate::domain::a005_banner::ui::list::BannerList;
use crate::domain::a006_ticket::ui::list::TicketList;
use crate::domain::a007_ticket_request::ui::list::TicketRequestList;
use crate::domain::a008_support_ticket::ui::details::SupportTicketDetails;
use crate::domain::a008_support_ticket::ui::list::{
    SupportTicketList, DETAIL_PREFIX as SUPPORT_DETAIL,
};
use crate::domain::a009_enquiry::ui::list::EnquiryList;
use crate::domain::a010_deposit::ui::list::DepositList;
use crate::domain::a011_withdrawal::ui::list::WithdrawalList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

fn detail_frame(key: &str, tabs_store: AppGlobalContext, body: AnyView) -> AnyView {
    let key_for_close = key.to_string();
    view! {
        <div class="page">
            <div class="header">
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| tabs_store.close_tab(&key_for_close)
                    >
                        "Close"
                    </button>
                </div>
            </div>
            {body}
        </div>
    }
    .into_any()
}

/// Render the content of the tab `key`; unknown keys get a placeholder
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_manager" => view! { <ManagerList /> }.into_any(),
        "a002_seller" => view! { <SellerList /> }.into_any(),
        "a003_event" => view! { <EventList /> }.into_any(),
        "a004_venue" => view! { <VenueList /> }.into_any(),
        "a005_banner" => view! { <BannerList /> }.into_any(),
        "a006_ticket" => view! { <TicketList /> }.into_any(),
        "a007_ticket_request" => view! { <TicketRequestList /> }.into_any(),
        "a008_support_ticket" => view! { <SupportTicketList /> }.into_any(),
        "a009_enquiry" => view! { <EnquiryList /> }.into_any(),
        "a010_deposit" => view! { <DepositList /> }.into_any(),
        "a011_withdrawal" => view! { <WithdrawalList /> }.into_any(),

        k if k.starts_with(SELLER_DETAIL) => {
            let id = k[SELLER_DETAIL.len()..].to_string();
            detail_frame(k, tabs_store, view! { <SellerDetails id=id /> }.into_any())
        }
        k if k.starts_with(SUPPORT_DETAIL) => {
            let id = k[SUPPORT_DETAIL.len()..].to_string();
            detail_frame(k, tabs_store, view! { <SupportTicketDetails id=id /> }.into_any())
        }

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Not available"</div> }.into_any()
        }
    }
}
