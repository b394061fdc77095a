//! Cancel/complete/reload wiring shared by the two dashboards.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::state::appointments::{AppointmentAction, AppointmentsState};
use crate::util::storage::BrowserStorage;
use crate::util::task::spawn_browser_task;

/// Reload the viewer's appointment list. `owner_id` is read when the
/// callback runs, so a session change is picked up on the next reload.
pub(crate) fn reload_handler(
    api: ApiClient<BrowserStorage>,
    viewer: Role,
    owner_id: Signal<Option<String>>,
    list: RwSignal<AppointmentsState>,
    redirect: RwSignal<Option<&'static str>>,
) -> Callback<()> {
    Callback::new(move |()| {
        let Some(id) = owner_id.get_untracked() else {
            list.update(|s| s.error = Some("Missing account id. Please sign in again.".to_owned()));
            return;
        };
        list.update(AppointmentsState::begin_load);
        let api = api.clone();
        spawn_browser_task(async move {
            let result = api.list_appointments(viewer, &id).await;
            if let Some(to) = list.try_update(|s| s.finish_load(result, viewer)).flatten() {
                redirect.set(Some(to));
            }
        });
    })
}

/// Send a cancel/complete request, then reload the list on success.
pub(crate) fn action_handler(
    api: ApiClient<BrowserStorage>,
    viewer: Role,
    list: RwSignal<AppointmentsState>,
    reload: Callback<()>,
    redirect: RwSignal<Option<&'static str>>,
) -> Callback<(String, AppointmentAction)> {
    Callback::new(move |(id, action): (String, AppointmentAction)| {
        if list.get_untracked().pending.is_some() {
            return;
        }
        list.update(|s| s.begin_action(&id));
        let api = api.clone();
        spawn_browser_task(async move {
            let result = match action {
                AppointmentAction::Cancel => api.cancel_appointment(&id).await,
                AppointmentAction::Complete => api.complete_appointment(&id).await,
            };
            let succeeded = result.is_ok();
            if let Some(to) = list.try_update(|s| s.finish_action(action, result, viewer)).flatten() {
                redirect.set(Some(to));
                return;
            }
            if succeeded {
                reload.run(());
            }
        });
    })
}
