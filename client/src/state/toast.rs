//! Single-slot toast notification state.
//!
//! DESIGN
//! ======
//! A new toast replaces the visible one. Each `show` bumps `generation`, and
//! the auto-dismiss timer only clears the generation it was scheduled for, so
//! a replaced toast's timer never hides its successor early.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Toast state shared through context as `RwSignal<ToastState>`.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    pub generation: u64,
}

impl ToastState {
    /// Replace any visible toast; returns the generation to dismiss later.
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.generation += 1;
        self.current = Some(toast);
        self.generation
    }

    /// Hide the toast if it is still the one shown at `generation`.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
