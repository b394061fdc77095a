//! Profile page state with view and edit modes.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::{ApiError, ErrorOutcome};
use crate::net::types::Role;

/// Editable copy of a profile plus the last saved version.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState<P> {
    pub original: Option<P>,
    pub draft: P,
    pub editing: bool,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<P: Clone + Default> ProfileState<P> {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Apply a fetch response. Returns a redirect target for a 401.
    pub fn finish_load(&mut self, result: Result<P, ApiError>, viewer: Role) -> Option<&'static str> {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.draft = profile.clone();
                self.original = Some(profile);
                None
            }
            Err(err) => self.fail(&err, viewer, "Failed to load profile"),
        }
    }

    pub fn start_edit(&mut self) {
        self.editing = true;
        self.error = None;
        self.success = None;
    }

    /// Leave edit mode and restore the last saved values.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.error = None;
        self.draft = self.original.clone().unwrap_or_default();
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
        self.success = None;
    }

    /// Apply a save response; the server copy replaces both versions.
    pub fn finish_save(&mut self, result: Result<P, ApiError>, viewer: Role) -> Option<&'static str> {
        self.saving = false;
        match result {
            Ok(saved) => {
                self.draft = saved.clone();
                self.original = Some(saved);
                self.editing = false;
                self.success = Some("Profile updated successfully".to_owned());
                None
            }
            Err(err) => self.fail(&err, viewer, "Failed to update profile"),
        }
    }

    fn fail(&mut self, err: &ApiError, viewer: Role, fallback: &str) -> Option<&'static str> {
        leptos::logging::warn!("profile: {err}");
        match err.outcome(viewer, fallback) {
            ErrorOutcome::Redirect(to) => Some(to),
            ErrorOutcome::Inline(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}
