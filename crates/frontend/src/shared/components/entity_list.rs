//! Generic list screen: header, filters, sortable table with row actions
//! and the pager, all driven by a [`ListController`].

use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::components::notice::Notice;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list::{
    CellKind, Column, ListAction, ListController, ListEntity, RowAction, RowActionDispatcher,
    RowRoute, SearchMode,
};
use crate::shared::list_utils::{highlight_matches, SearchInput};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn cell_view<T>(column: &Column<T>, item: &T, highlight: &str) -> AnyView {
    let raw = (column.value)(item);
    match column.kind {
        CellKind::Badge => view! {
            <td class="table__cell"><StatusBadge status=raw /></td>
        }
        .into_any(),
        CellKind::Link if raw.is_empty() => view! { <td class="table__cell">"-"</td> }.into_any(),
        CellKind::Link => {
            let href = raw.clone();
            view! {
                <td class="table__cell">
                    <a href=href target="_blank" rel="noopener noreferrer">{raw}</a>
                </td>
            }
            .into_any()
        }
        CellKind::Date => view! { <td class="table__cell">{format_date(&raw)}</td> }.into_any(),
        CellKind::DateTime => {
            view! { <td class="table__cell">{format_datetime(&raw)}</td> }.into_any()
        }
        CellKind::Number | CellKind::Money => view! {
            <td class="table__cell table__cell--right">{raw}</td>
        }
        .into_any(),
        CellKind::Text => view! {
            <td class="table__cell">{highlight_matches(&raw, highlight)}</td>
        }
        .into_any(),
    }
}

#[component]
pub fn EntityList<T: ListEntity>(
    controller: ListController<T>,
    /// Shows the "New" button
    #[prop(optional)]
    on_create: Option<Callback<()>>,
    /// Receives the row for [`RowAction::Edit`]
    #[prop(optional)]
    on_edit: Option<Callback<T>>,
    /// Receives the rows currently shown, after search and sort
    #[prop(optional)]
    on_filtered_change: Option<Callback<Vec<T>>>,
) -> impl IntoView {
    let state = controller.state;
    let tabs = use_app_context();
    let notice_timeout = use_config().notice_timeout_ms;

    let rows = Memo::new(move |_| state.with(|s| s.visible_items()));
    if let Some(callback) = on_filtered_change {
        Effect::new(move |_| callback.run(rows.get()));
    }

    let on_row_action = move |action: RowAction, item: T| {
        match RowActionDispatcher::<T>::route(action, &item) {
            RowRoute::OpenEditor(record) => {
                if let Some(callback) = on_edit {
                    callback.run(record);
                }
            }
            RowRoute::Navigate { key, title } => tabs.open_tab(&key, &title),
            RowRoute::Mutate(mutation) => {
                if let Some(message) = mutation.action.confirmation() {
                    if !confirm(message) {
                        return;
                    }
                }
                controller.perform(mutation);
            }
            RowRoute::Unsupported => {
                log::warn!("{}: {:?} is not available for {}", T::KEY, action, item.id())
            }
        }
    };

    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let sort = Signal::derive(move || state.with(|s| s.sort));
    let highlight = move || match T::SEARCH_MODE {
        SearchMode::Client => state.with(|s| s.search.clone()),
        SearchMode::Server => String::new(),
    };
    let has_actions = !T::ROW_ACTIONS.is_empty();

    view! {
        <div class="page">
            <PageHeader
                title=T::TITLE
                subtitle=Signal::derive(move || {
                    state.with(|s| s.total_items.map(|count| format!("{} records", count)))
                })
            >
                {on_create.map(|callback| view! {
                    <button class="button button--primary" on:click=move |_| callback.run(())>
                        {icon("plus")}
                        "New"
                    </button>
                })}
                <button
                    class="button button--secondary"
                    on:click=move |_| controller.dispatch(ListAction::Reload)
                    disabled=move || state.with(|s| s.loading)
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |term| controller.dispatch(ListAction::SetSearch(term)))
                    placeholder="Search..."
                />
                {T::DATE_FILTER.then(|| view! {
                    <DateRangeFilter
                        value=Signal::derive(move || state.with(|s| s.date_range))
                        on_change=Callback::new(move |range| {
                            controller.dispatch(ListAction::SetDateRange(range))
                        })
                        label="Period"
                    />
                })}
            </div>

            <Notice
                message=Signal::derive(move || state.with(|s| s.action_error.clone()))
                on_dismiss=Callback::new(move |_| controller.dispatch(ListAction::DismissActionError))
                timeout_ms=notice_timeout
            />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {T::COLUMNS.iter().map(|column| {
                                let align = if column.is_right_aligned() { "right" } else { "left" };
                                if column.sortable {
                                    view! {
                                        <SortableHeaderCell
                                            label=column.label
                                            sort_key=column.key
                                            sort=sort
                                            on_sort=Callback::new(move |key| {
                                                controller.dispatch(ListAction::ToggleSort(key))
                                            })
                                            align=align
                                        />
                                    }
                                    .into_any()
                                } else {
                                    view! { <th class="table__header-cell">{column.label}</th> }.into_any()
                                }
                            }).collect_view()}
                            {has_actions.then(|| view! {
                                <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let term = highlight();
                            rows.get().into_iter().map(|item| {
                                let cells = T::COLUMNS
                                    .iter()
                                    .map(|column| cell_view(column, &item, &term))
                                    .collect_view();
                                let actions = has_actions.then(|| {
                                    let buttons = RowActionDispatcher::<T>::available(&item).into_iter().map(|action| {
                                        let item = item.clone();
                                        view! {
                                            <button
                                                class="button button--icon"
                                                title=action.label()
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_row_action(action, item.clone());
                                                }
                                            >
                                                {icon(action.icon())}
                                            </button>
                                        }
                                    }).collect_view();
                                    view! { <td class="table__cell table__cell--actions">{buttons}</td> }
                                });
                                view! {
                                    <tr class="table__row">
                                        {cells}
                                        {actions}
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>

                <Show when=move || state.with(|s| s.loading)>
                    <div class="table__loading">"Loading..."</div>
                </Show>
                <Show when=move || {
                    state.with(|s| s.is_loaded && !s.loading) && rows.with(|r| r.is_empty())
                }>
                    <div class="table__empty">"No records"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_items=Signal::derive(move || state.with(|s| s.total_items))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| controller.dispatch(ListAction::GoToPage(page)))
                on_page_size_change=Callback::new(move |size| {
                    controller.dispatch(ListAction::SetPageSize(size))
                })
                page_size_options=T::PAGE_SIZES
            />
        </div>
    }
}
