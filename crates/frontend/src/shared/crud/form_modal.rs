use contracts::shared::validation::{FieldKind, FieldSpec};
use leptos::prelude::*;

use super::form::{AttachmentSpec, FormModel};
use super::view_model::CrudViewModel;
use crate::shared::modal::Modal;

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Date => "date",
        FieldKind::DateTime => "datetime-local",
        FieldKind::Number => "number",
        FieldKind::Text | FieldKind::LongText => "text",
    }
}

fn field_view<F: FormModel>(spec: FieldSpec, vm: CrudViewModel<F>) -> AnyView {
    let modal = vm.modal;
    let name = spec.name;
    let value = move || modal.with(|m| m.form.value(name));
    let error = move || modal.with(|m| m.field_errors.get(name).map(str::to_string));
    let on_input = move |ev| vm.set_field(name, event_target_value(&ev));

    let input = match spec.kind {
        FieldKind::LongText => view! {
            <textarea class="form__textarea" rows="4" prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        kind => view! {
            <input class="form__input" type=input_type(kind) prop:value=value on:input=on_input />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {spec.label}
                {spec.rules.is_required().then_some(" *")}
            </label>
            {input}
            {move || error().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
    .into_any()
}

fn attachment_view<F: FormModel>(spec: AttachmentSpec, vm: CrudViewModel<F>) -> AnyView {
    let modal = vm.modal;
    let name = spec.name;
    let picked = move || modal.with(|m| m.attachment(name).map(|a| a.file.name()));
    let error = move || modal.with(|m| m.field_errors.get(name).map(str::to_string));
    let on_change = move |ev| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        vm.attach(name, input.files().and_then(|files| files.get(0)));
    };
    let editing = move || modal.with(|m| m.form.is_edit());

    view! {
        <div class="form__group">
            <label class="form__label">
                {spec.label}
                {move || (spec.required_on_create && !editing()).then_some(" *")}
            </label>
            <input class="form__input" type="file" accept=spec.accept on:change=on_change />
            {move || picked().map(|file| view! { <span class="form__hint">{file}</span> })}
            {move || error().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
    .into_any()
}

/// Create / edit dialog for any [`FormModel`]
#[component]
pub fn FormModal<F: FormModel>(
    vm: CrudViewModel<F>,
    /// Runs after the server confirmed the save, with the echoed record
    on_submit_success: Callback<Option<F::Record>>,
) -> impl IntoView {
    let modal = vm.modal;
    let is_open = move || modal.with(|m| m.is_open());
    let submitting = move || modal.with(|m| m.is_submitting());

    view! {
        <Show when=is_open>
            <Modal
                title=Signal::derive(move || modal.with(|m| m.title()))
                on_close=Callback::new(move |_| vm.cancel())
            >
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.save_command(on_submit_success);
                    }
                >
                    {move || modal.with(|m| m.error.clone()).map(|e| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })}
                    {move || {
                        let specs = modal.with(|m| m.form.field_specs().into_owned());
                        specs.into_iter().map(|spec| field_view(spec, vm)).collect_view()
                    }}
                    {F::ATTACHMENTS.iter().map(|spec| attachment_view(*spec, vm)).collect_view()}
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| vm.cancel()
                            disabled=submitting
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="button button--primary" disabled=submitting>
                            {move || if submitting() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
