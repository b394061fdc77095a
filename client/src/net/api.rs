//! REST client for the appointment backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! CONFIGURATION
//! =============
//! Backend path casing differs between deployments (`/api/patients` vs
//! `/api/Patients`), so the collection casing and base URL are configuration,
//! read at compile time from `MEDBOOK_API_BASE_URL` and
//! `MEDBOOK_API_PATH_CASING`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Appointment, Credentials, DoctorProfile, DoctorRegistration, DoctorSummary, LoginResponse, NewAppointment,
    PatientProfile, PatientRegistration, Role,
};
use crate::state::token::TokenStore;
use crate::util::storage::KeyValueStorage;

pub const DEFAULT_API_BASE_URL: &str = "/api-backend";

// =============================================================================
// CONFIG
// =============================================================================

/// Casing of collection segments (`patients`, `doctors`, `appointments`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathCasing {
    #[default]
    Lower,
    Pascal,
}

impl PathCasing {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("pascal") => Self::Pascal,
            _ => Self::Lower,
        }
    }

    fn apply(self, segment: &str) -> String {
        match self {
            Self::Lower => segment.to_owned(),
            Self::Pascal => {
                let mut chars = segment.chars();
                chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub casing: PathCasing,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), casing: PathCasing::Lower }
    }
}

impl ApiConfig {
    /// Values baked in at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("MEDBOOK_API_BASE_URL"), option_env!("MEDBOOK_API_PATH_CASING"))
    }

    #[must_use]
    pub fn from_values(base_url: Option<&str>, casing: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, casing: PathCasing::parse(casing) }
    }

    #[must_use]
    pub fn routes(&self) -> ApiRoutes {
        ApiRoutes { casing: self.casing }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Backend paths, relative to the base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiRoutes {
    casing: PathCasing,
}

impl ApiRoutes {
    fn collection(self, name: &str) -> String {
        format!("/api/{}", self.casing.apply(name))
    }

    #[must_use]
    pub fn login(self, audience: Role) -> String {
        format!("{}/login", self.collection(audience.collection()))
    }

    #[must_use]
    pub fn register(self, audience: Role) -> String {
        format!("{}/register", self.collection(audience.collection()))
    }

    #[must_use]
    pub fn profile(self, audience: Role, id: &str) -> String {
        format!("{}/{id}", self.collection(audience.collection()))
    }

    #[must_use]
    pub fn appointments_for(self, audience: Role, id: &str) -> String {
        let owner = match audience {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        };
        format!("{}/{owner}/{id}", self.collection("appointments"))
    }

    #[must_use]
    pub fn appointments(self) -> String {
        self.collection("appointments")
    }

    #[must_use]
    pub fn cancel_appointment(self, id: &str) -> String {
        format!("{}/{id}/cancel", self.collection("appointments"))
    }

    #[must_use]
    pub fn complete_appointment(self, id: &str) -> String {
        format!("{}/{id}/complete", self.collection("appointments"))
    }

    #[must_use]
    pub fn doctors(self) -> String {
        self.collection("doctors")
    }
}

#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// CLIENT
// =============================================================================

/// Credential exchange, the one backend call the session layer needs.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, audience: Role, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
}

/// REST client. Reads the bearer token from the shared [`TokenStore`] on
/// every request, so a login or logout takes effect immediately.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    config: ApiConfig,
    tokens: TokenStore<S>,
}

impl<S: KeyValueStorage> ApiClient<S> {
    #[must_use]
    pub fn new(config: ApiConfig, tokens: TokenStore<S>) -> Self {
        Self { config, tokens }
    }

    fn routes(&self) -> ApiRoutes {
        self.config.routes()
    }

    /// Create a patient account.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn register_patient(&self, registration: &PatientRegistration) -> Result<(), ApiError> {
        self.send_unit(Verb::Post, &self.routes().register(Role::Patient), Some(registration))
            .await
    }

    /// Create a doctor account.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn register_doctor(&self, registration: &DoctorRegistration) -> Result<(), ApiError> {
        self.send_unit(Verb::Post, &self.routes().register(Role::Doctor), Some(registration))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn fetch_patient(&self, id: &str) -> Result<PatientProfile, ApiError> {
        self.send_json(Verb::Get, &self.routes().profile(Role::Patient, id), None::<&()>)
            .await
    }

    /// Save patient profile fields; returns the stored profile.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn update_patient(&self, id: &str, profile: &PatientProfile) -> Result<PatientProfile, ApiError> {
        let path = self.routes().profile(Role::Patient, id);
        let text = self.dispatch(Verb::Put, &path, Some(to_body(profile)?)).await?;
        Ok(parse_or(&text, profile))
    }

    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn fetch_doctor(&self, id: &str) -> Result<DoctorProfile, ApiError> {
        self.send_json(Verb::Get, &self.routes().profile(Role::Doctor, id), None::<&()>)
            .await
    }

    /// Save doctor profile fields; returns the stored profile.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn update_doctor(&self, id: &str, profile: &DoctorProfile) -> Result<DoctorProfile, ApiError> {
        let path = self.routes().profile(Role::Doctor, id);
        let text = self.dispatch(Verb::Put, &path, Some(to_body(profile)?)).await?;
        Ok(parse_or(&text, profile))
    }

    /// List appointments owned by a patient or a doctor.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn list_appointments(&self, owner: Role, id: &str) -> Result<Vec<Appointment>, ApiError> {
        self.send_json::<Option<Vec<Appointment>>, ()>(Verb::Get, &self.routes().appointments_for(owner, id), None)
            .await
            .map(Option::unwrap_or_default)
    }

    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn schedule_appointment(&self, appointment: &NewAppointment) -> Result<(), ApiError> {
        self.send_unit(Verb::Post, &self.routes().appointments(), Some(appointment))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn cancel_appointment(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(Verb::Put, &self.routes().cancel_appointment(id), None::<&()>)
            .await
    }

    /// Mark an appointment completed. The backend only allows doctors.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn complete_appointment(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(Verb::Put, &self.routes().complete_appointment(id), None::<&()>)
            .await
    }

    /// # Errors
    ///
    /// Returns the classified backend or transport failure.
    pub async fn list_doctors(&self) -> Result<Vec<DoctorSummary>, ApiError> {
        self.send_json::<Option<Vec<DoctorSummary>>, ()>(Verb::Get, &self.routes().doctors(), None)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = body.map(to_body).transpose()?;
        let text = self.dispatch(verb, path, body).await?;
        parse_body(&text)
    }

    async fn send_unit<B: Serialize>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let body = body.map(to_body).transpose()?;
        self.dispatch(verb, path, body).await.map(|_| ())
    }

    /// Send one request; returns the body text of a 2xx response.
    async fn dispatch(&self, verb: Verb, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.url(path);
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
            };
            if let Some(token) = self.tokens.retrieve() {
                builder = builder.header("Authorization", &bearer_header(&token));
            }
            let sent = match body {
                Some(body) => {
                    builder
                        .json(&body)
                        .map_err(|e| ApiError::Network(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                leptos::logging::warn!("request failed: {verb:?} {path}: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                leptos::logging::warn!("request rejected: {verb:?} {path} -> {status}");
                return Err(ApiError::from_response(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body, &self.tokens);
            Err(ApiError::Unavailable)
        }
    }
}

impl<S: KeyValueStorage> AuthBackend for ApiClient<S> {
    async fn login(&self, audience: Role, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .send_json(Verb::Post, &self.routes().login(audience), Some(credentials))
            .await?;
        if response.token.is_empty() {
            return Err(ApiError::Decode("login response carried no token".to_owned()));
        }
        Ok(response)
    }
}

// =============================================================================
// BODY HELPERS
// =============================================================================

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Parse a JSON body. An empty body reads as JSON `null`.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Updates may answer `204 No Content`; keep what was sent in that case.
fn parse_or<T: DeserializeOwned + Clone>(text: &str, sent: &T) -> T {
    parse_body::<Option<T>>(text)
        .ok()
        .flatten()
        .unwrap_or_else(|| sent.clone())
}
