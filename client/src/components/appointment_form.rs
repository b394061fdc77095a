//! Patient form for booking a new appointment.

use leptos::prelude::*;

use crate::components::field::FormField;
use crate::state::appointments::ScheduleForm;

/// Doctor picker, UTC date-time and reason. Falls back to a free-text
/// doctor id when the doctor list could not be loaded.
#[component]
pub fn ScheduleAppointmentForm(form: RwSignal<ScheduleForm>, on_submit: Callback<()>) -> impl IntoView {
    let submitting = Signal::derive(move || form.get().submitting);

    let doctor_picker = move || {
        if form.get().doctors_failed {
            return view! {
                <FormField
                    label="Doctor ID"
                    value=Signal::derive(move || form.get().doctor_id)
                    on_input=Callback::new(move |v| form.update(|f| f.doctor_id = v))
                    disabled=submitting
                    required=true
                />
                <p class="form-hint">"Doctor list unavailable; enter the doctor's ID."</p>
            }
            .into_any();
        }
        let options = form
            .get()
            .doctors
            .into_iter()
            .map(|doctor| {
                let label = doctor.label();
                view! { <option value=doctor.id>{label}</option> }
            })
            .collect::<Vec<_>>();
        view! {
            <label class="form-field">
                <span class="form-field__label">"Doctor"</span>
                <select
                    class="form-field__input"
                    prop:value=move || form.get().doctor_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.doctor_id = value);
                    }
                >
                    <option value="">"Select a doctor"</option>
                    {options}
                </select>
            </label>
        }
        .into_any()
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.get_untracked().submitting {
            on_submit.run(());
        }
    };

    view! {
        <form class="schedule-form" on:submit=on_form_submit>
            <h2>"Schedule Appointment"</h2>
            {doctor_picker}
            <FormField
                label="Date and time (UTC)"
                input_type="datetime-local"
                value=Signal::derive(move || form.get().appointment_date)
                on_input=Callback::new(move |v| form.update(|f| f.appointment_date = v))
                disabled=submitting
                required=true
            />
            <FormField
                label="Reason"
                value=Signal::derive(move || form.get().reason)
                on_input=Callback::new(move |v| form.update(|f| f.reason = v))
                disabled=submitting
                required=true
            />
            <Show when=move || form.get().error.is_some()>
                <p class="message message--error">{move || form.get().error.unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Scheduling..." } else { "Schedule" }}
            </button>
        </form>
    }
}
