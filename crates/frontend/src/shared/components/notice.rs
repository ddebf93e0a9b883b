use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Transient message above a table. Hides itself after `timeout_ms`
/// unless a newer message replaced it.
#[component]
pub fn Notice(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
    timeout_ms: u32,
) -> impl IntoView {
    Effect::new(move |_| {
        let Some(shown) = message.get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if message.try_get_untracked().flatten().as_deref() == Some(shown.as_str()) {
                on_dismiss.run(());
            }
        });
    });

    view! {
        {move || message.get().map(|msg| view! {
            <div class="notice notice--error" role="alert">
                <span class="notice__text">{msg}</span>
                <button class="notice__close" on:click=move |_| on_dismiss.run(())>
                    {crate::shared::icons::icon("x")}
                </button>
            </div>
        })}
    }
}
