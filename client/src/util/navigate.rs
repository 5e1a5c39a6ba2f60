//! Deep-link launching for call and chat channels.
//!
//! TRADE-OFFS
//! ==========
//! Browsers give no signal when a `tel:` or `whatsapp://` handler is missing;
//! only a synchronous `set_href` failure is observable, so that is the only
//! launch failure reported.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use crate::net::types::ContactChannel;

/// Opens an external URL (dialer, chat app) from the page.
pub trait Launcher {
    /// # Errors
    ///
    /// Returns a description of the failure when the browser refuses the URL.
    fn open(&self, href: &str) -> Result<(), String>;
}

/// `Launcher` that navigates `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn open(&self, href: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
            window.location().set_href(href).map_err(|e| format!("{e:?}"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
            Err("navigation unavailable outside the browser".to_owned())
        }
    }
}

/// Deep link for a virtual number on `channel`. Email has no deep link.
pub fn deep_link(channel: ContactChannel, number: &str) -> Option<String> {
    match channel {
        ContactChannel::Call => Some(format!("tel:{number}")),
        ContactChannel::Whatsapp => {
            Some(format!("whatsapp://send/?phone={number}&text=&type=phone_number&app_absent=0"))
        }
        ContactChannel::Email => None,
    }
}
