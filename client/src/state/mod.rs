//! Reactive state records shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each record is a plain struct wrapped in an `RwSignal` by the root `App`.
//! Mutation helpers live on the structs so they stay testable without a
//! reactive runtime.

pub mod listings;
pub mod session;
pub mod toast;
