//! Doctor dashboard: review, complete or cancel booked appointments.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::components::appointment_list::AppointmentList;
use crate::net::types::Role;
use crate::pages::appointment_actions::{action_handler, reload_handler};
use crate::state::appointments::AppointmentsState;
use crate::state::auth::AuthState;
use crate::util::auth::{RequireRole, install_redirect};

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Doctor>
            <DoctorDashboard/>
        </RequireRole>
    }
}

#[component]
fn DoctorDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let list = RwSignal::new(AppointmentsState::default());
    let doctor_id = Signal::derive(move || auth.get().user_id().map(str::to_owned));

    let reload = reload_handler(services.api.clone(), Role::Doctor, doctor_id, list, redirect);
    let on_action = action_handler(services.api.clone(), Role::Doctor, list, reload, redirect);

    Effect::new(move || reload.run(()));

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h1>"Doctor Dashboard"</h1>
                <button class="btn" on:click=move |_| reload.run(())>
                    "Refresh"
                </button>
            </div>
            <AppointmentList viewer=Role::Doctor state=list on_action=on_action/>
        </div>
    }
}
