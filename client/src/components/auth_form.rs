//! Sign-in / registration form.
//!
//! The page owns the field signals so it can clear them once the backend
//! accepts the submission.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::AuthMode;

/// Input signals for the auth form.
#[derive(Clone, Copy, Debug)]
pub struct AuthFields {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl AuthFields {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Customer),
        }
    }

    pub fn reset(self) {
        self.email.set(String::new());
        self.password.set(String::new());
        self.role.set(Role::Customer);
    }
}

impl Default for AuthFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AuthForm(
    fields: AuthFields,
    mode: Signal<AuthMode>,
    busy: Signal<bool>,
    on_submit: Callback<()>,
    on_mode: Callback<AuthMode>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        on_submit.run(());
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">{move || mode.get().title()}</h2>
            <form class="auth-form" on:submit=on_form_submit>
                <label class="field">
                    <span class="field__label">"Email Address"</span>
                    <input
                        class="field__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || fields.email.get()
                        on:input=move |ev| fields.email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || fields.password.get()
                        on:input=move |ev| fields.password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || mode.get() == AuthMode::Register>
                    <label class="field">
                        <span class="field__label">"Role"</span>
                        <select
                            class="field__input"
                            prop:value=move || fields.role.get().as_str()
                            on:change=move |ev| fields.role.set(Role::from_input(&event_target_value(&ev)))
                        >
                            <option value="customer">"Customer"</option>
                            <option value="agent">"Agent"</option>
                        </select>
                    </label>
                </Show>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || mode.get().title()}
                </button>
            </form>
            <p class="auth-card__switch">
                {move || match mode.get() {
                    AuthMode::SignIn => "Don't have an account? ",
                    AuthMode::Register => "Already have an account? ",
                }}
                <button class="link-button" on:click=move |_| on_mode.run(mode.get_untracked().toggled())>
                    {move || mode.get().toggled().title()}
                </button>
            </p>
        </div>
    }
}
