//! Profile pages with view and edit modes for both audiences.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::components::field::{FieldRow, FormField};
use crate::net::error::ApiError;
use crate::net::types::{DoctorProfile, PatientProfile, Role};
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;
use crate::util::auth::{RequireRole, install_redirect};
use crate::util::task::spawn_browser_task;

#[component]
pub fn PatientProfilePage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Patient>
            <PatientProfileView/>
        </RequireRole>
    }
}

#[component]
pub fn DoctorProfilePage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Doctor>
            <DoctorProfileView/>
        </RequireRole>
    }
}

/// Load the profile once, then hand back a save callback.
fn wire_profile<P, L, LF, S, SF>(
    viewer: Role,
    state: RwSignal<ProfileState<P>>,
    redirect: RwSignal<Option<&'static str>>,
    load: L,
    save: S,
) -> Callback<()>
where
    P: Clone + Default + Send + Sync + 'static,
    L: Fn(String) -> LF + 'static,
    LF: std::future::Future<Output = Result<P, ApiError>> + 'static,
    S: Fn(String, P) -> SF + Send + Sync + 'static,
    SF: std::future::Future<Output = Result<P, ApiError>> + 'static,
{
    let auth = expect_context::<RwSignal<AuthState>>();

    Effect::new(move || {
        let Some(id) = auth.get_untracked().user_id().map(str::to_owned) else {
            state.update(|s| {
                s.loading = false;
                s.error = Some("Missing account id. Please sign in again.".to_owned());
            });
            return;
        };
        let request = load(id);
        spawn_browser_task(async move {
            let result = request.await;
            if let Some(to) = state.try_update(|s| s.finish_load(result, viewer)).flatten() {
                redirect.set(Some(to));
            }
        });
    });

    Callback::new(move |()| {
        let Some(id) = auth.get_untracked().user_id().map(str::to_owned) else {
            return;
        };
        if state.get_untracked().saving {
            return;
        }
        state.update(ProfileState::begin_save);
        let request = save(id, state.get_untracked().draft);
        spawn_browser_task(async move {
            let result = request.await;
            if let Some(to) = state.try_update(|s| s.finish_save(result, viewer)).flatten() {
                redirect.set(Some(to));
            }
        });
    })
}

#[component]
fn ProfileActions<P>(state: RwSignal<ProfileState<P>>, on_save: Callback<()>) -> impl IntoView
where
    P: Clone + Default + Send + Sync + 'static,
{
    view! {
        <Show when=move || state.get().error.is_some()>
            <p class="message message--error">{move || state.get().error.unwrap_or_default()}</p>
        </Show>
        <Show when=move || state.get().success.is_some()>
            <p class="message message--success">{move || state.get().success.unwrap_or_default()}</p>
        </Show>
        <div class="profile__actions">
            <Show
                when=move || state.get().editing
                fallback=move || {
                    view! {
                        <button class="btn" type="button" on:click=move |_| state.update(ProfileState::start_edit)>
                            "Edit Profile"
                        </button>
                    }
                }
            >
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || state.get().saving
                    on:click=move |_| on_save.run(())
                >
                    {move || if state.get().saving { "Saving..." } else { "Save" }}
                </button>
                <button class="btn" type="button" on:click=move |_| state.update(ProfileState::cancel_edit)>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn PatientProfileView() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let state = RwSignal::new(ProfileState::<PatientProfile>::loading());
    let (load_api, save_api) = (services.api.clone(), services.api.clone());
    let on_save = wire_profile(
        Role::Patient,
        state,
        redirect,
        move |id| {
            let api = load_api.clone();
            async move { api.fetch_patient(&id).await }
        },
        move |id, draft| {
            let api = save_api.clone();
            async move { api.update_patient(&id, &draft).await }
        },
    );

    let draft = move || state.get().draft;
    let editing = move || state.get().editing;

    view! {
        <div class="profile">
            <h1>"My Profile"</h1>
            <Show when=move || !state.get().loading fallback=|| view! { <p>"Loading profile..."</p> }>
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <FieldRow label="First name" value=Signal::derive(move || draft().first_name)/>
                            <FieldRow label="Last name" value=Signal::derive(move || draft().last_name)/>
                            <FieldRow
                                label="Date of birth"
                                value=Signal::derive(move || draft().date_of_birth_input().to_owned())
                            />
                            <FieldRow label="Email" value=Signal::derive(move || draft().email)/>
                            <FieldRow label="Phone number" value=Signal::derive(move || draft().phone_number)/>
                        }
                    }
                >
                    <FormField
                        label="First name"
                        value=Signal::derive(move || draft().first_name)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.first_name = v))
                    />
                    <FormField
                        label="Last name"
                        value=Signal::derive(move || draft().last_name)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.last_name = v))
                    />
                    <FormField
                        label="Date of birth"
                        input_type="date"
                        value=Signal::derive(move || draft().date_of_birth_input().to_owned())
                        on_input=Callback::new(move |v| state.update(|s| s.draft.date_of_birth = v))
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || draft().email)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.email = v))
                    />
                    <FormField
                        label="Phone number"
                        input_type="tel"
                        value=Signal::derive(move || draft().phone_number)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.phone_number = v))
                    />
                </Show>
                <ProfileActions state=state on_save=on_save/>
            </Show>
        </div>
    }
}

#[component]
fn DoctorProfileView() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let state = RwSignal::new(ProfileState::<DoctorProfile>::loading());
    let (load_api, save_api) = (services.api.clone(), services.api.clone());
    let on_save = wire_profile(
        Role::Doctor,
        state,
        redirect,
        move |id| {
            let api = load_api.clone();
            async move { api.fetch_doctor(&id).await }
        },
        move |id, draft| {
            let api = save_api.clone();
            async move { api.update_doctor(&id, &draft).await }
        },
    );

    let draft = move || state.get().draft;
    let editing = move || state.get().editing;

    view! {
        <div class="profile">
            <h1>"My Profile"</h1>
            <Show when=move || !state.get().loading fallback=|| view! { <p>"Loading profile..."</p> }>
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <FieldRow label="First name" value=Signal::derive(move || draft().first_name)/>
                            <FieldRow label="Last name" value=Signal::derive(move || draft().last_name)/>
                            <FieldRow label="Specialization" value=Signal::derive(move || draft().specialization)/>
                            <FieldRow label="Email" value=Signal::derive(move || draft().email)/>
                            <FieldRow label="Phone number" value=Signal::derive(move || draft().phone_number)/>
                        }
                    }
                >
                    <FormField
                        label="First name"
                        value=Signal::derive(move || draft().first_name)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.first_name = v))
                    />
                    <FormField
                        label="Last name"
                        value=Signal::derive(move || draft().last_name)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.last_name = v))
                    />
                    <FormField
                        label="Specialization"
                        value=Signal::derive(move || draft().specialization)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.specialization = v))
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || draft().email)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.email = v))
                    />
                    <FormField
                        label="Phone number"
                        input_type="tel"
                        value=Signal::derive(move || draft().phone_number)
                        on_input=Callback::new(move |v| state.update(|s| s.draft.phone_number = v))
                    />
                </Show>
                <ProfileActions state=state on_save=on_save/>
            </Show>
        </div>
    }
}
