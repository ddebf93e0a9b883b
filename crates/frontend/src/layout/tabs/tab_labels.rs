//! Tab titles by key.

use crate::domain::a002_seller::ui::list::DETAIL_PREFIX as SELLER_DETAIL;
use crate::domain::a008_support_ticket::ui::list::DETAIL_PREFIX as SUPPORT_DETAIL;

/// Title of a list tab. Detail tabs are titled by the row that opened
/// them; this gives their generic fallback. Unknown keys map to themselves.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_manager" => "Managers",
        "a002_seller" => "Sellers",
        "a003_event" => "Events",
        "a004_venue" => "Venues",
        "a005_banner" => "Banners",
        "a006_ticket" => "Tickets",
        "a007_ticket_request" => "Ticket requests",
        "a008_support_ticket" => "Support",
        "a009_enquiry" => "Enquiries",
        "a010_deposit" => "Deposits",
        "a011_withdrawal" => "Withdrawals",
        k if k.starts_with(SELLER_DETAIL) => "Seller",
        k if k.starts_with(SUPPORT_DETAIL) => "Support ticket",
        other => other,
    }
}
