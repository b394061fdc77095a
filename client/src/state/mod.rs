//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `appointments`, `profile`) so pages can
//! depend on small focused models. `token` is the durable layer under `auth`.

pub mod appointments;
pub mod auth;
pub mod profile;
pub mod token;
