//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, requests, redirects)
//! and delegates rendering details to `components`.

pub(crate) mod appointment_actions;
pub mod doctor_dashboard;
pub mod home;
pub mod login;
pub mod patient_dashboard;
pub mod profile;
pub mod register;
