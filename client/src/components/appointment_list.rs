//! Appointment table shared by both dashboards.
//!
//! DESIGN
//! ======
//! The list only renders and reports clicks. The owning page performs the
//! request and reloads the list, so both audiences share one code path.

use leptos::prelude::*;

use crate::net::types::{Appointment, Role};
use crate::state::appointments::{AppointmentAction, AppointmentsState};
use crate::util::datetime;

#[component]
pub fn AppointmentList(
    viewer: Role,
    state: RwSignal<AppointmentsState>,
    on_action: Callback<(String, AppointmentAction)>,
) -> impl IntoView {
    let counterpart = match viewer {
        Role::Patient => "Doctor",
        Role::Doctor => "Patient",
    };

    view! {
        <section class="appointments">
            <h2>"Appointments"</h2>
            <Show when=move || state.get().error.is_some()>
                <p class="message message--error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().notice.is_some()>
                <p class="message message--success">{move || state.get().notice.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p>"Loading appointments..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=move || view! { <p class="appointments__empty">"No appointments yet."</p> }
                >
                    <table class="appointments__table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>{counterpart}</th>
                                <th>"Reason"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let current = state.get();
                                current
                                    .items
                                    .into_iter()
                                    .map(|appt| {
                                        let busy = current.pending.as_deref() == Some(appt.id.as_str());
                                        view! {
                                            <AppointmentRow
                                                appointment=appt
                                                viewer=viewer
                                                busy=busy
                                                on_action=on_action
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn AppointmentRow(
    appointment: Appointment,
    viewer: Role,
    busy: bool,
    on_action: Callback<(String, AppointmentAction)>,
) -> impl IntoView {
    let who = match viewer {
        Role::Patient => appointment.doctor_label(),
        Role::Doctor => appointment.patient_label(),
    };
    let actions = AppointmentAction::available(&appointment, viewer)
        .into_iter()
        .map(|action| {
            let id = appointment.id.clone();
            view! {
                <button
                    class="btn btn--small"
                    disabled=busy
                    on:click=move |_| on_action.run((id.clone(), action))
                >
                    {action.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr class="appointments__row">
            <td>{datetime::display(&appointment.appointment_date)}</td>
            <td>{who}</td>
            <td>{appointment.reason.clone()}</td>
            <td class="appointments__status">{appointment.status.label()}</td>
            <td class="appointments__actions">{actions}</td>
        </tr>
    }
}
