//! Bearer-token store with a write-through in-memory cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! One durable key holds the token. Two auxiliary keys cache the last
//! resolved role and user id so the header can label the user across reloads
//! even when a token omits those claims. Concurrent writers are last write
//! wins; logins and logouts are rare, user-driven actions.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::Role;
use crate::util::jwt;
use crate::util::storage::KeyValueStorage;

pub const TOKEN_KEY: &str = "auth_token";
pub const ROLE_KEY: &str = "auth_role";
pub const USER_ID_KEY: &str = "auth_user_id";

/// Token store over a durable backend. Clones share the cache.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
    cached: Arc<Mutex<Option<String>>>,
}

impl<S: KeyValueStorage> TokenStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage, cached: Arc::new(Mutex::new(None)) }
    }

    /// Persist `token`, or remove the persisted token when `None`.
    pub fn store(&self, token: Option<&str>) {
        match token {
            Some(token) => {
                self.storage.set(TOKEN_KEY, token);
                leptos::logging::log!("token stored: {}...", jwt::preview(token));
            }
            None => {
                self.storage.remove(TOKEN_KEY);
                leptos::logging::log!("token cleared");
            }
        }
        *self.cache() = token.map(str::to_owned);
    }

    /// Cached token if set, else whatever durable storage holds.
    #[must_use]
    pub fn retrieve(&self) -> Option<String> {
        if let Some(token) = self.cache().clone() {
            return Some(token);
        }
        self.storage.get(TOKEN_KEY)
    }

    /// Remember the resolved role and id for display continuity.
    pub fn remember_identity(&self, role: Option<Role>, user_id: Option<&str>) {
        if let Some(role) = role {
            self.storage.set(ROLE_KEY, role.as_str());
        }
        if let Some(user_id) = user_id {
            self.storage.set(USER_ID_KEY, user_id);
        }
    }

    /// Previously remembered `(role, id)`.
    #[must_use]
    pub fn cached_identity(&self) -> (Option<Role>, Option<String>) {
        let role = self.storage.get(ROLE_KEY).and_then(|raw| Role::parse(&raw));
        let user_id = self.storage.get(USER_ID_KEY).filter(|id| !id.is_empty());
        (role, user_id)
    }

    pub fn forget_identity(&self) {
        self.storage.remove(ROLE_KEY);
        self.storage.remove(USER_ID_KEY);
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
