//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and forms while reading/writing shared state
//! from Leptos context providers. Network calls stay in the pages.

pub mod appointment_form;
pub mod appointment_list;
pub mod field;
pub mod layout;
