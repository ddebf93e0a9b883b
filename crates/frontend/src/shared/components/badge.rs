use leptos::prelude::*;

/// Badge variant for a status word as the API spells it
pub fn status_variant(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "active" | "approved" | "open" | "published" | "success" | "completed" | "paid" => "success",
        "pending" | "processing" => "warning",
        "inactive" | "rejected" | "closed" | "failed" | "cancelled" | "hidden" => "error",
        _ => "neutral",
    }
}

/// Coloured badge for a status word
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!("badge badge--{}", status_variant(&status));
    view! { <span class=class>{status}</span> }
}
