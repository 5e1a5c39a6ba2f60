//! Event handlers for the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges component callbacks to `crate::services`: each handler snapshots
//! the state it needs, runs the service in a local task, then applies the
//! outcome to the shared signals and raises at most one toast.

#[cfg(test)]
#[path = "home_actions_test.rs"]
mod home_actions_test;

use leptos::prelude::*;

use crate::components::auth_form::AuthFields;
use crate::components::contact_agent::ContactAttempt;
use crate::services::PortalServices;
use crate::services::contact::AUTH_REQUIRED;
use crate::services::listings::apply_fetch;
use crate::services::session::{AuthOutcome, RestoreOutcome};
#[cfg(feature = "hydrate")]
use crate::services::{contact, listings as listing_service, session as session_service};
use crate::state::listings::ListingsState;
use crate::state::session::{AuthMode, SessionState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION;
use crate::state::toast::{Toast, ToastState};

/// Mark the stored-token check as in flight.
pub(crate) fn begin_restore(session: &mut SessionState, listings: &mut ListingsState) {
    session.restoring = true;
    listings.loading = true;
}

/// Apply a finished session restore. Returns toasts in display order.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn apply_restore(
    session: &mut SessionState,
    listings: &mut ListingsState,
    outcome: RestoreOutcome,
) -> Vec<Toast> {
    let mut toasts: Vec<Toast> = outcome.toast().into_iter().collect();
    match outcome {
        RestoreOutcome::Restored { session: restored, listings: fetched } => {
            session.sign_in(restored);
            toasts.extend(apply_fetch(listings, fetched));
        }
        RestoreOutcome::NoToken | RestoreOutcome::Expired => apply_logout(session, listings),
    }
    toasts
}

/// Apply a finished sign-in or registration. Returns toasts in display order.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn apply_auth(
    session: &mut SessionState,
    listings: &mut ListingsState,
    outcome: AuthOutcome,
) -> Vec<Toast> {
    let mut toasts = vec![outcome.toast()];
    match outcome {
        AuthOutcome::SignedIn { session: signed_in, listings: fetched } => {
            session.sign_in(signed_in);
            toasts.extend(apply_fetch(listings, fetched));
        }
        AuthOutcome::Registered => session.mode = AuthMode::SignIn,
        AuthOutcome::Failed(_) => listings.loading = false,
    }
    session.submitting = false;
    toasts
}

/// Drop the session and everything fetched for it. Filters survive.
pub(crate) fn apply_logout(session: &mut SessionState, listings: &mut ListingsState) {
    session.sign_out();
    listings.clear_for_logout();
}

/// Validate the draft; true when the create request may be sent.
pub(crate) fn begin_create(listings: &mut ListingsState) -> bool {
    let errors = listings.draft.validate();
    if !errors.is_empty() {
        listings.form_errors = errors;
        return false;
    }
    listings.form_errors.clear();
    listings.submitting = true;
    true
}

/// Copyable bundle of the page's state handles.
#[derive(Clone, Copy)]
pub(crate) struct HomeActions {
    pub session: RwSignal<SessionState>,
    pub listings: RwSignal<ListingsState>,
    pub toast: RwSignal<ToastState>,
    services: StoredValue<PortalServices>,
}

impl HomeActions {
    pub fn from_context() -> Self {
        Self {
            session: expect_context::<RwSignal<SessionState>>(),
            listings: expect_context::<RwSignal<ListingsState>>(),
            toast: expect_context::<RwSignal<ToastState>>(),
            services: StoredValue::new(expect_context::<PortalServices>()),
        }
    }

    /// Show `toast`, replacing any visible one, and schedule its dismissal.
    pub fn notify(self, toast: Toast) {
        let Some(generation) = self.toast.try_update(|t| t.show(toast)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toast;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_DURATION).await;
                let _ = toasts.try_update(|t| t.dismiss(generation));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = generation;
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn notify_all(self, toasts: impl IntoIterator<Item = Toast>) {
        for toast in toasts {
            self.notify(toast);
        }
    }

    /// Run `f` against both state records at once.
    fn apply<T: Default>(self, f: impl FnOnce(&mut SessionState, &mut ListingsState) -> T) -> T {
        self.session
            .try_update(|s| self.listings.try_update(|l| f(s, l)))
            .flatten()
            .unwrap_or_default()
    }

    pub fn set_mode(self, mode: AuthMode) {
        self.session.update(|s| s.mode = mode);
    }

    /// Check a persisted token once at startup.
    pub fn restore(self) {
        let has_token = self.services.with_value(|s| s.tokens.load().is_some());
        if !has_token {
            return;
        }
        self.session.update(|s| self.listings.update(|l| begin_restore(s, l)));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let services = self.services.get_value();
            let filters = self.listings.with_untracked(|l| l.filters.clone());
            let outcome = session_service::restore(&*services.api, &*services.tokens, &filters).await;
            let toasts = self.apply(|s, l| apply_restore(s, l, outcome));
            self.notify_all(toasts);
        });
    }

    /// Submit the auth form in the current mode.
    pub fn submit_auth(self, fields: AuthFields) {
        if self.session.with_untracked(|s| s.submitting) {
            return;
        }
        self.session.update(|s| s.submitting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let services = self.services.get_value();
            let email = fields.email.get_untracked();
            let password = fields.password.get_untracked();
            let outcome = match self.session.with_untracked(|s| s.mode) {
                AuthMode::SignIn => {
                    let filters = self.listings.with_untracked(|l| l.filters.clone());
                    self.listings.update(|l| l.loading = true);
                    session_service::login(&*services.api, &*services.tokens, &email, &password, &filters).await
                }
                AuthMode::Register => {
                    let role = fields.role.get_untracked();
                    session_service::register(&*services.api, &email, &password, role).await
                }
            };

            if outcome.succeeded() {
                fields.reset();
            }
            let toasts = self.apply(|s, l| apply_auth(s, l, outcome));
            self.notify_all(toasts);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
        }
    }

    pub fn logout(self) {
        let toast = self.services.with_value(|s| crate::services::session::logout(&*s.tokens));
        self.apply(apply_logout);
        self.notify(toast);
    }

    /// Re-fetch listings with the current filters.
    pub fn search(self) {
        let Some(token) = self.session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        self.listings.update(|l| l.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let services = self.services.get_value();
            let filters = self.listings.with_untracked(|l| l.filters.clone());
            let result = listing_service::refresh(&*services.api, &token, &filters).await;
            let toast = self.listings.try_update(|l| apply_fetch(l, result)).flatten();
            self.notify_all(toast);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    /// Validate and submit the draft listing.
    pub fn create_listing(self) {
        let Some(token) = self.session.with_untracked(|s| s.token().map(str::to_owned)) else {
            self.notify(Toast::error(AUTH_REQUIRED));
            return;
        };
        if !self.listings.try_update(begin_create).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let services = self.services.get_value();
            let (draft, filters) = self.listings.with_untracked(|l| (l.draft.clone(), l.filters.clone()));
            let outcome = listing_service::create(&*services.api, &token, &draft, &filters).await;
            let toast = self.listings.try_update(|l| listing_service::apply_create(l, outcome)).flatten();
            self.notify_all(toast);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    /// Reach a listing's agent. Without a session no request is made.
    pub fn contact(self, attempt: ContactAttempt) {
        let session = self.session.with_untracked(|s| s.current.clone());
        if session.is_none() {
            attempt.busy.set(false);
            self.notify(Toast::error(AUTH_REQUIRED));
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let services = self.services.get_value();
            let toast = contact::contact(
                &*services.api,
                &*services.launcher,
                session.as_ref(),
                attempt.listing_id,
                attempt.channel,
                &attempt.form,
            )
            .await;
            attempt.busy.set(false);
            self.notify(toast);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            attempt.busy.set(false);
        }
    }
}
