use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager with first / prev / next / last buttons and a page size select.
/// Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    /// Total row count, when the server reports it
    #[prop(into)]
    total_items: Signal<Option<u64>>,
    #[prop(into)] page_size: Signal<u32>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
    page_size_options: &'static [u32],
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let base = format!("{} / {}", current_page.get(), total_pages.get().max(1));
                    match total_items.get() {
                        Some(count) => format!("{} ({})", base, count),
                        None => base,
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
