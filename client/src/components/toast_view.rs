//! Renders the single active toast; renders nothing when none is visible.

#[cfg(test)]
#[path = "toast_view_test.rs"]
mod toast_view_test;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind};

/// Modifier class for a toast's kind.
fn toast_modifier(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
    }
}

#[component]
pub fn ToastView(toast: Signal<Option<Toast>>) -> impl IntoView {
    move || {
        toast.get().map(|Toast { message, kind }| {
            let class = format!("toast {}", toast_modifier(kind));
            view! {
                <div class=class role="status" aria-live="polite">
                    {message}
                </div>
            }
        })
    }
}
