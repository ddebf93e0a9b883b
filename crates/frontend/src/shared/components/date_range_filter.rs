//! Start / end date inputs with month shortcuts. Emits a [`DateRange`];
//! the list state rejects ranges whose start is after the end.

use chrono::{Datelike, Utc};
use contracts::shared::DateRange;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{input_value, month_bounds, parse_input_date, previous_month_bounds};

#[component]
pub fn DateRangeFilter(
    #[prop(into)] value: Signal<DateRange>,
    on_change: Callback<DateRange>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let on_start = move |raw: String| {
        let end = value.get_untracked().end_date;
        on_change.run(DateRange::new(parse_input_date(&raw), end));
    };
    let on_end = move |raw: String| {
        let start = value.get_untracked().start_date;
        on_change.run(DateRange::new(start, parse_input_date(&raw)));
    };

    let on_current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some((start, end)) = month_bounds(today.year(), today.month()) {
            on_change.run(DateRange::new(Some(start), Some(end)));
        }
    };
    // steps back from the selected start, or from today
    let on_previous_month = move |_| {
        let anchor = value
            .get_untracked()
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());
        if let Some((start, end)) = previous_month_bounds(anchor) {
            on_change.run(DateRange::new(Some(start), Some(end)));
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}
            <Flex class="date-range-filter" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-filter__input"
                    prop:value=move || input_value(value.get().start_date)
                    on:change=move |ev| on_start(event_target_value(&ev))
                />
                <div>"–"</div>
                <input
                    type="date"
                    class="date-range-filter__input"
                    prop:value=move || input_value(value.get().end_date)
                    on:change=move |ev| on_end(event_target_value(&ev))
                />
                <ButtonGroup>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_previous_month>
                        "-1M"
                    </Button>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_current_month>
                        "0M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_change.run(DateRange::default())
                    >
                        "Clear"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
