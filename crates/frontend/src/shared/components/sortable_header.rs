//! Clickable table header cell that shows the sort direction.

use crate::shared::list::SortState;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    sort_key: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<&'static str>,
    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    view! {
        <th class="table__header-cell" class:table__header-cell--right={align == "right"}>
            <div class="table__sortable-header" on:click=move |_| on_sort.run(sort_key)>
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, sort_key))>
                    {move || sort.with(|s| get_sort_indicator(s, sort_key))}
                </span>
            </div>
        </th>
    }
}
