use contracts::domain::a002_seller::Seller;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::api::use_api_client;
use crate::shared::components::badge::StatusBadge;
use crate::shared::date_utils::format_date;

fn row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details-row">
            <span class="details-row__label">{label}</span>
            <span class="details-row__value">{if value.is_empty() { "-".to_string() } else { value }}</span>
        </div>
    }
}

#[component]
pub fn SellerDetails(id: String) -> impl IntoView {
    let seller = RwSignal::new(None::<Seller>);
    let error = RwSignal::new(None::<String>);

    let client = use_api_client();
    spawn_local(async move {
        match model::fetch_by_id(client.as_ref(), &id).await {
            Ok(found) => {
                seller.try_set(Some(found));
            }
            Err(e) => {
                log::error!("seller {}: {}", id, e);
                error.try_set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || match seller.get() {
                None if error.with(Option::is_some) => ().into_any(),
                None => view! { <div class="details-loading">"Loading..."</div> }.into_any(),
                Some(s) => view! {
                    <div class="details-header">
                        <h3>{s.name.clone()}</h3>
                        <StatusBadge status=if s.is_active { "Active" } else { "Inactive" } />
                    </div>
                    <div class="details-body">
                        {row("Business", s.business_name.clone().unwrap_or_default())}
                        {row("Email", s.email.clone())}
                        {row("Phone", s.phone.clone().unwrap_or_default())}
                        {row("Events", s.total_events.map(|n| n.to_string()).unwrap_or_default())}
                        {row("Joined", s.created_at.as_deref().map(format_date).unwrap_or_default())}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
