//! Identity extraction from decoded token claims.
//!
//! DESIGN
//! ======
//! Backend releases have emitted the same facts under different claim names
//! (short JWT names, capitalized names, legacy WS-* namespace URIs). Each
//! identity field is resolved by an ordered rule: exact keys first, then a
//! case-insensitive substring scan over every claim key. The rule table is
//! plain data so a new backend shape is one more entry, not a new branch.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use serde_json::Value;

use crate::net::types::Role;
use crate::util::jwt::{self, Claims};

pub const NAME_IDENTIFIER_URI: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
pub const EMAIL_ADDRESS_URI: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
pub const ROLE_URI: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Which identity field a rule resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityField {
    Id,
    Role,
    Email,
}

/// One resolution rule: exact keys in priority order, then substring needles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimRule {
    pub field: IdentityField,
    pub exact_keys: Vec<String>,
    pub contains: Vec<String>,
}

impl ClaimRule {
    #[must_use]
    pub fn new(field: IdentityField, exact_keys: &[&str], contains: &[&str]) -> Self {
        Self {
            field,
            exact_keys: exact_keys.iter().map(|k| (*k).to_owned()).collect(),
            contains: contains.iter().map(|k| k.to_ascii_lowercase()).collect(),
        }
    }

    /// Resolve this rule against `claims`, returning the first usable value.
    #[must_use]
    pub fn resolve(&self, claims: &Claims) -> Option<String> {
        let exact = self
            .exact_keys
            .iter()
            .find_map(|key| claims.get(key).and_then(claim_text));
        if exact.is_some() {
            return exact;
        }
        self.contains.iter().find_map(|needle| {
            claims
                .iter()
                .filter(|(key, _)| key.to_ascii_lowercase().contains(needle.as_str()))
                .find_map(|(_, value)| claim_text(value))
        })
    }
}

/// Ordered rule table. Rules for the same field are tried in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimRules {
    rules: Vec<ClaimRule>,
}

impl Default for ClaimRules {
    fn default() -> Self {
        Self {
            rules: vec![
                ClaimRule::new(
                    IdentityField::Id,
                    &["nameid", "sub", "Id", "id", "uid", NAME_IDENTIFIER_URI, "NameIdentifier"],
                    &["nameidentifier"],
                ),
                ClaimRule::new(IdentityField::Role, &["role", "Role", ROLE_URI], &["role"]),
                ClaimRule::new(IdentityField::Email, &["email", "Email", EMAIL_ADDRESS_URI], &["email"]),
            ],
        }
    }
}

impl ClaimRules {
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it is consulted after existing rules for its field.
    #[must_use]
    pub fn with_rule(mut self, rule: ClaimRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[ClaimRule] {
        &self.rules
    }

    fn resolve(&self, field: IdentityField, claims: &Claims) -> Option<String> {
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .find_map(|rule| rule.resolve(claims))
    }

    /// Project decoded claims onto an [`Identity`].
    #[must_use]
    pub fn identity_from_claims(&self, claims: &Claims) -> Identity {
        Identity {
            id: self.resolve(IdentityField::Id, claims),
            role: self
                .resolve(IdentityField::Role, claims)
                .and_then(|raw| Role::parse(&raw)),
            email: self.resolve(IdentityField::Email, claims),
        }
    }

    /// Decode `token` and extract its identity. Never panics; a missing or
    /// undecodable token yields [`Identity::default`].
    #[must_use]
    pub fn extract_identity(&self, token: Option<&str>) -> Identity {
        let Some(token) = token else {
            return Identity::default();
        };
        match jwt::decode(token) {
            Some(claims) => self.identity_from_claims(&claims),
            None => {
                leptos::logging::warn!("token decode failed: {}...", jwt::preview(token));
                Identity::default()
            }
        }
    }
}

/// Client-side view of who the token says the user is.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    pub id: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.role.is_none() && self.email.is_none()
    }
}

/// Coerce a claim value into text. Arrays collapse to their first element.
fn claim_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.first().and_then(claim_text),
        _ => None,
    }
}
