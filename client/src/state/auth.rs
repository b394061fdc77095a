//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` owns the token lifecycle (initialize on page load, login,
//! logout) and produces `AuthState` snapshots. The app root publishes the
//! snapshot as an `RwSignal<AuthState>` context; route guards and pages only
//! read it. The identity inside a snapshot is always recomputed from the
//! token store, never edited by hand.
//!
//! ERROR HANDLING
//! ==============
//! Decode failures degrade to an empty identity. Login transport or backend
//! failures are returned untouched for the page to render; nothing retries.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::net::api::AuthBackend;
use crate::net::error::ApiError;
use crate::net::types::{AccountSummary, Credentials, LoginResponse, Role};
use crate::state::token::TokenStore;
use crate::util::claims::{ClaimRules, Identity};
use crate::util::jwt;
use crate::util::storage::KeyValueStorage;

/// Authentication state tracking the current token, identity, and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub identity: Identity,
    /// Account summary from the most recent login response, if any.
    pub user: Option<AccountSummary>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Unresolved until the session is initialized on the client.
    fn default() -> Self {
        Self { token: None, identity: Identity::default(), user: None, loading: true }
    }
}

impl AuthState {
    /// Resolved state with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { loading: false, ..Self::default() }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.role
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.identity.id.as_deref()
    }
}

/// Token store plus claim rules. Cheap to clone; clones share the store.
#[derive(Clone, Debug)]
pub struct SessionContext<S> {
    tokens: TokenStore<S>,
    rules: Arc<ClaimRules>,
}

impl<S: KeyValueStorage> SessionContext<S> {
    #[must_use]
    pub fn new(tokens: TokenStore<S>, rules: ClaimRules) -> Self {
        Self { tokens, rules: Arc::new(rules) }
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Resolve the session once per page load.
    ///
    /// Reads the persisted token, extracts its identity, and fills fields the
    /// token leaves out from the cached role/id pairing. A token that does not
    /// decode yields no identity at all. Always returns with `loading = false`.
    #[must_use]
    pub fn initialize(&self) -> AuthState {
        let Some(token) = self.tokens.retrieve() else {
            leptos::logging::log!("session: no stored token");
            return AuthState::signed_out();
        };

        let identity = match jwt::decode(&token) {
            Some(claims) => {
                let mut identity = self.rules.identity_from_claims(&claims);
                let (cached_role, cached_id) = self.tokens.cached_identity();
                identity.role = identity.role.or(cached_role);
                identity.id = identity.id.or(cached_id);
                self.tokens
                    .remember_identity(identity.role, identity.id.as_deref());
                identity
            }
            None => {
                leptos::logging::warn!("session: stored token did not decode: {}...", jwt::preview(&token));
                Identity::default()
            }
        };

        AuthState { token: Some(token), identity, user: None, loading: false }
    }

    /// Exchange credentials for a token and publish the new identity.
    ///
    /// Token claims win over the login response's `user` object, which wins
    /// over the requested audience (the role fallback). Returns the new state
    /// and the raw response so the caller can redirect.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`ApiError`] unchanged; the store is not
    /// touched on failure.
    pub async fn login<B: AuthBackend>(
        &self,
        backend: &B,
        credentials: &Credentials,
        audience: Role,
    ) -> Result<(AuthState, LoginResponse), ApiError> {
        let response = backend.login(audience, credentials).await?;
        self.tokens.store(Some(&response.token));
        self.tokens.forget_identity();

        let extracted = self.rules.extract_identity(Some(&response.token));
        let declared = response.user.as_ref();
        let identity = Identity {
            id: extracted
                .id
                .or_else(|| declared.and_then(|u| u.id.clone())),
            role: extracted
                .role
                .or_else(|| declared.and_then(|u| u.role.as_deref()).and_then(Role::parse))
                .or(Some(audience)),
            email: extracted
                .email
                .or_else(|| declared.and_then(|u| u.email.clone())),
        };
        self.tokens
            .remember_identity(identity.role, identity.id.as_deref());
        leptos::logging::log!(
            "session: signed in as {} ({})",
            identity.role.map_or("unknown", Role::as_str),
            identity.id.as_deref().unwrap_or("no id")
        );

        let state = AuthState {
            token: Some(response.token.clone()),
            identity,
            user: response.user.clone(),
            loading: false,
        };
        Ok((state, response))
    }

    /// Forget the token and every cached identity field. No backend call:
    /// a bearer token has nothing to revoke client-side. Idempotent.
    #[must_use]
    pub fn logout(&self) -> AuthState {
        self.tokens.store(None);
        self.tokens.forget_identity();
        AuthState::signed_out()
    }
}
