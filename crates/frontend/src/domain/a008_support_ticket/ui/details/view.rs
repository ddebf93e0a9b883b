use contracts::domain::a008_support_ticket::SupportTicket;
use contracts::enums::SupportStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::model;
use crate::shared::api::{use_api_client, ApiClient};
use crate::shared::components::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;

#[component]
pub fn SupportTicketDetails(id: String) -> impl IntoView {
    let ticket = RwSignal::new(None::<SupportTicket>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let client = StoredValue::new_local(use_api_client());

    let load = move |id: String| {
        let client: Rc<dyn ApiClient> = client.get_value();
        spawn_local(async move {
            match model::fetch_by_id(client.as_ref(), &id).await {
                Ok(found) => {
                    ticket.try_set(Some(found));
                }
                Err(e) => {
                    log::error!("support ticket {}: {}", id, e);
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    };
    load(id);

    let toggle = move |_| {
        let Some(current) = ticket.get_untracked() else {
            return;
        };
        let client: Rc<dyn ApiClient> = client.get_value();
        busy.set(true);
        spawn_local(async move {
            match model::toggle_status(client.as_ref(), &current).await {
                Ok(updated) => {
                    ticket.try_set(Some(updated));
                    error.try_set(None);
                }
                Err(e) => {
                    log::warn!("support ticket {}: toggle failed: {}", current.id, e);
                    error.try_set(Some(e.to_string()));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || ticket.get().map(|t| {
                let action = match t.status {
                    SupportStatus::Open => "Close ticket",
                    SupportStatus::Closed => "Reopen ticket",
                };
                view! {
                    <div class="details-header">
                        <h3>{t.subject.clone()}</h3>
                        <StatusBadge status=t.status.display_name() />
                        <button class="button button--secondary" on:click=toggle disabled=move || busy.get()>
                            {action}
                        </button>
                    </div>
                    <div class="details-body">
                        <div class="details-row">
                            <span class="details-row__label">"From"</span>
                            <span class="details-row__value">
                                {match &t.user_email {
                                    Some(email) => format!("{} <{}>", t.user_name, email),
                                    None => t.user_name.clone(),
                                }}
                            </span>
                        </div>
                        <div class="details-row">
                            <span class="details-row__label">"Opened"</span>
                            <span class="details-row__value">
                                {t.created_at.as_deref().map(format_datetime).unwrap_or_default()}
                            </span>
                        </div>
                        <p class="details-message">{t.message.clone()}</p>
                    </div>
                }
            })}
        </div>
    }
}
