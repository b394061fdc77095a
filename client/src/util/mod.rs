//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, token
//! decoding, task spawning) from page and component logic to keep them
//! testable.

pub mod auth;
pub mod claims;
pub mod datetime;
pub mod jwt;
pub mod storage;
pub mod task;
