//! Contact-agent flow for call, WhatsApp and email channels.
//!
//! ERROR HANDLING
//! ==============
//! Every path ends in exactly one toast. A deep link the browser refuses, or a
//! backend response without a virtual number, is reported as a failure rather
//! than as a started call/chat.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::api::PortalApi;
use crate::net::types::{ContactChannel, ContactRequest, EmailInquiry};
use crate::state::session::Session;
use crate::state::toast::Toast;
use crate::util::navigate::{Launcher, deep_link};

pub const AUTH_REQUIRED: &str = "Authentication required";
pub const EMAIL_LOGGED: &str = "Email logged";
pub const CALL_STARTED: &str = "Call initiated";
pub const WHATSAPP_OPENED: &str = "WhatsApp chat opened";
pub const CONTACT_FAILED: &str = "Failed to initiate contact";
pub const NO_VIRTUAL_NUMBER: &str = "No contact number is available for this listing";

/// Free-text fields of the contact panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Reply address: the typed email, or the signed-in user's email.
    pub fn reply_email(&self, session: &Session) -> String {
        let typed = self.email.trim();
        if typed.is_empty() { session.user.email.clone() } else { typed.to_owned() }
    }
}

fn launch_failed_message(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::Whatsapp => "Could not open WhatsApp",
        ContactChannel::Call | ContactChannel::Email => "Could not open the dialer",
    }
}

fn launched_message(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::Whatsapp => WHATSAPP_OPENED,
        ContactChannel::Call | ContactChannel::Email => CALL_STARTED,
    }
}

/// Reach the agent of `listing_id` over `channel`.
///
/// Without a session this fails immediately and issues no request.
pub async fn contact(
    api: &dyn PortalApi,
    launcher: &dyn Launcher,
    session: Option<&Session>,
    listing_id: i64,
    channel: ContactChannel,
    form: &ContactForm,
) -> Toast {
    let Some(session) = session else {
        return Toast::error(AUTH_REQUIRED);
    };
    let email = form.reply_email(session);

    if channel == ContactChannel::Email {
        let inquiry = EmailInquiry {
            listing_id,
            name: form.name.trim().to_owned(),
            email,
            message: form.message.trim().to_owned(),
        };
        return match api.log_email(&session.token, &inquiry).await {
            Ok(()) => Toast::success(EMAIL_LOGGED),
            Err(e) => {
                leptos::logging::error!("contact error: {e}");
                Toast::error(e.user_message(CONTACT_FAILED))
            }
        };
    }

    let request = ContactRequest { channel, listing_id, user_email: email };
    let handle = match api.request_contact(&session.token, &request).await {
        Ok(handle) => handle,
        Err(e) => {
            leptos::logging::error!("contact error: {e}");
            return Toast::error(e.user_message(CONTACT_FAILED));
        }
    };

    let Some(href) = handle
        .virtual_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .and_then(|number| deep_link(channel, number))
    else {
        leptos::logging::warn!("contact response for listing {listing_id} had no virtual number");
        return Toast::error(NO_VIRTUAL_NUMBER);
    };

    match launcher.open(&href) {
        Ok(()) => Toast::success(launched_message(channel)),
        Err(e) => {
            leptos::logging::warn!("deep link {href} failed: {e}");
            Toast::error(launch_failed_message(channel))
        }
    }
}
