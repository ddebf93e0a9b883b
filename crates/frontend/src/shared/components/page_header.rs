use leptos::prelude::*;

/// Title row of a screen with its action buttons on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Secondary line under the title, e.g. the row count
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                {move || subtitle.get().map(|text| view! {
                    <span class="header__subtitle">{text}</span>
                })}
            </div>
            <div class="header__actions">
                {children()}
            </div>
        </div>
    }
}
