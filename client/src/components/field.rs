//! Labelled form input bound to a slice of page state.

use leptos::prelude::*;

/// Text-like input. `value` reads the current text, `on_input` writes it.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                required=required
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Read-only label/value row for profile view mode.
#[component]
pub fn FieldRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="field-row">
            <span class="field-row__label">{label}</span>
            <span class="field-row__value">{move || value.get()}</span>
        </div>
    }
}
