//! UI helpers for list screens: search box, sort indicators, match highlight.

use leptos::prelude::*;

use crate::shared::list::SortState;

/// Highlight every case-insensitive occurrence of `filter` in `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    // lowercasing changed byte offsets, highlighting would cut mid-char
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: &SortState, key: &str) -> &'static str {
    if sort.is_sorted_by(key) {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortState, key: &str) -> &'static str {
    if sort.is_sorted_by(key) {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    /// Current search term
    #[prop(into)]
    value: Signal<String>,
    /// Called on every edit
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::SortDirection;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState { key: Some("name"), direction: SortDirection::Descending };
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "email"), " ⇅");
        assert_eq!(get_sort_class(&sort, "name"), "sort-icon sort-icon--active");
    }
}
