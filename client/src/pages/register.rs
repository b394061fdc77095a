//! Account registration for patients and doctors.
//!
//! Both pages post the full field set and send the new user to their
//! audience's login page on success.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::components::field::FormField;
use crate::net::error::ApiError;
use crate::net::types::{DoctorRegistration, PatientRegistration, Role};
use crate::util::auth::install_redirect;
use crate::util::task::spawn_browser_task;

pub const REGISTRATION_INCOMPLETE: &str = "All fields are required";

fn trimmed(value: &str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(REGISTRATION_INCOMPLETE);
    }
    Ok(value.to_owned())
}

fn required_password(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err(REGISTRATION_INCOMPLETE);
    }
    Ok(value.to_owned())
}

/// # Errors
///
/// [`REGISTRATION_INCOMPLETE`] when any field is blank.
pub fn validate_patient_registration(input: &PatientRegistration) -> Result<PatientRegistration, &'static str> {
    Ok(PatientRegistration {
        first_name: trimmed(&input.first_name)?,
        last_name: trimmed(&input.last_name)?,
        date_of_birth: trimmed(&input.date_of_birth)?,
        email: trimmed(&input.email)?,
        phone_number: trimmed(&input.phone_number)?,
        password: required_password(&input.password)?,
    })
}

/// # Errors
///
/// [`REGISTRATION_INCOMPLETE`] when any field is blank.
pub fn validate_doctor_registration(input: &DoctorRegistration) -> Result<DoctorRegistration, &'static str> {
    Ok(DoctorRegistration {
        first_name: trimmed(&input.first_name)?,
        last_name: trimmed(&input.last_name)?,
        specialization: trimmed(&input.specialization)?,
        email: trimmed(&input.email)?,
        phone_number: trimmed(&input.phone_number)?,
        password: required_password(&input.password)?,
    })
}

/// Shared submit flow: validate, post, then redirect to the login page.
fn submit_registration<T, V, F, Fut>(
    draft: RwSignal<T>,
    validate: V,
    send: F,
    audience: Role,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    redirect: RwSignal<Option<&'static str>>,
) where
    T: Clone + Send + Sync + 'static,
    V: Fn(&T) -> Result<T, &'static str>,
    F: FnOnce(T) -> Fut,
    Fut: std::future::Future<Output = Result<(), ApiError>> + 'static,
{
    if busy.get_untracked() {
        return;
    }
    let body = match validate(&draft.get_untracked()) {
        Ok(body) => body,
        Err(message) => {
            error.set(Some(message.to_owned()));
            return;
        }
    };
    busy.set(true);
    error.set(None);
    let request = send(body);
    spawn_browser_task(async move {
        match request.await {
            Ok(()) => {
                leptos::logging::log!("registration: {audience} account created");
                redirect.set(Some(audience.login_path()));
            }
            Err(err) => {
                leptos::logging::warn!("registration failed: {err}");
                error.set(Some(err.user_message("Registration failed")));
            }
        }
        busy.set(false);
    });
}

#[component]
pub fn PatientRegisterPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let draft = RwSignal::new(PatientRegistration::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = services.api.clone();
        submit_registration(
            draft,
            validate_patient_registration,
            move |body| async move { api.register_patient(&body).await },
            Role::Patient,
            busy,
            error,
            redirect,
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Patient Registration"</h1>
                <FormField
                    label="First name"
                    value=Signal::derive(move || draft.get().first_name)
                    on_input=Callback::new(move |v| draft.update(|d| d.first_name = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Last name"
                    value=Signal::derive(move || draft.get().last_name)
                    on_input=Callback::new(move |v| draft.update(|d| d.last_name = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Date of birth"
                    input_type="date"
                    value=Signal::derive(move || draft.get().date_of_birth)
                    on_input=Callback::new(move |v| draft.update(|d| d.date_of_birth = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || draft.get().email)
                    on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Phone number"
                    input_type="tel"
                    value=Signal::derive(move || draft.get().phone_number)
                    on_input=Callback::new(move |v| draft.update(|d| d.phone_number = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || draft.get().password)
                    on_input=Callback::new(move |v| draft.update(|d| d.password = v))
                    disabled=busy
                    required=true
                />
                <RegisterFooter audience=Role::Patient busy=busy error=error/>
            </form>
        </div>
    }
}

#[component]
pub fn DoctorRegisterPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let draft = RwSignal::new(DoctorRegistration::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = services.api.clone();
        submit_registration(
            draft,
            validate_doctor_registration,
            move |body| async move { api.register_doctor(&body).await },
            Role::Doctor,
            busy,
            error,
            redirect,
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Doctor Registration"</h1>
                <FormField
                    label="First name"
                    value=Signal::derive(move || draft.get().first_name)
                    on_input=Callback::new(move |v| draft.update(|d| d.first_name = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Last name"
                    value=Signal::derive(move || draft.get().last_name)
                    on_input=Callback::new(move |v| draft.update(|d| d.last_name = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Specialization"
                    value=Signal::derive(move || draft.get().specialization)
                    on_input=Callback::new(move |v| draft.update(|d| d.specialization = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || draft.get().email)
                    on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Phone number"
                    input_type="tel"
                    value=Signal::derive(move || draft.get().phone_number)
                    on_input=Callback::new(move |v| draft.update(|d| d.phone_number = v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || draft.get().password)
                    on_input=Callback::new(move |v| draft.update(|d| d.password = v))
                    disabled=busy
                    required=true
                />
                <RegisterFooter audience=Role::Doctor busy=busy error=error/>
            </form>
        </div>
    }
}

#[component]
fn RegisterFooter(audience: Role, busy: RwSignal<bool>, error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="message message--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
            {move || if busy.get() { "Creating account..." } else { "Register" }}
        </button>
        <p class="auth-card__switch">
            "Already registered? "
            <a href=audience.login_path()>"Sign in"</a>
        </p>
    }
}
