//! Patient dashboard: book appointments and manage upcoming ones.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::components::appointment_form::ScheduleAppointmentForm;
use crate::components::appointment_list::AppointmentList;
use crate::net::error::ErrorOutcome;
use crate::net::types::Role;
use crate::pages::appointment_actions::{action_handler, reload_handler};
use crate::state::appointments::{AppointmentsState, ScheduleForm};
use crate::state::auth::AuthState;
use crate::util::auth::{RequireRole, install_redirect};
use crate::util::datetime;
use crate::util::task::spawn_browser_task;

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Patient>
            <PatientDashboard/>
        </RequireRole>
    }
}

#[component]
fn PatientDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let list = RwSignal::new(AppointmentsState::default());
    let form = RwSignal::new(ScheduleForm::default());
    let patient_id = Signal::derive(move || auth.get().user_id().map(str::to_owned));

    let reload = reload_handler(services.api.clone(), Role::Patient, patient_id, list, redirect);
    let on_action = action_handler(services.api.clone(), Role::Patient, list, reload, redirect);

    let api = services.api.clone();
    Effect::new(move || {
        reload.run(());
        let api = api.clone();
        spawn_browser_task(async move {
            let result = api.list_doctors().await;
            form.update(|f| f.set_doctors(result));
        });
    });

    let api = services.api.clone();
    let on_schedule = Callback::new(move |()| {
        let Some(patient_id) = patient_id.get_untracked() else {
            return;
        };
        let request = match form.get_untracked().to_request(&patient_id, datetime::now()) {
            Ok(request) => request,
            Err(message) => {
                form.update(|f| f.error = Some(message.to_owned()));
                return;
            }
        };
        form.update(|f| {
            f.submitting = true;
            f.error = None;
        });
        let api = api.clone();
        spawn_browser_task(async move {
            let result = api.schedule_appointment(&request).await;
            form.update(|f| f.submitting = false);
            match result {
                Ok(()) => {
                    form.update(ScheduleForm::reset);
                    list.update(|s| s.notice = Some("Appointment scheduled".to_owned()));
                    reload.run(());
                }
                Err(err) => match err.outcome(Role::Patient, "Failed to schedule appointment") {
                    ErrorOutcome::Redirect(to) => redirect.set(Some(to)),
                    ErrorOutcome::Inline(message) => form.update(|f| f.error = Some(message)),
                },
            }
        });
    });

    view! {
        <div class="dashboard">
            <h1>"Patient Dashboard"</h1>
            <ScheduleAppointmentForm form=form on_submit=on_schedule/>
            <AppointmentList viewer=Role::Patient state=list on_action=on_action/>
        </div>
    }
}
