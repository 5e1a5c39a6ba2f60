//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation)
//! from page and component logic to improve reuse and testability.

pub mod format;
pub mod navigate;
pub mod storage;
