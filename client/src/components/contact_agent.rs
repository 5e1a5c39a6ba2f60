//! Contact panel shown under a listing card.

use leptos::prelude::*;

use crate::net::types::ContactChannel;
use crate::services::contact::ContactForm;

/// A contact request raised by the panel. `busy` is cleared by the handler
/// once the attempt finishes.
#[derive(Clone, Debug)]
pub struct ContactAttempt {
    pub listing_id: i64,
    pub channel: ContactChannel,
    pub form: ContactForm,
    pub busy: RwSignal<bool>,
}

#[component]
pub fn ContactAgent(listing_id: i64, on_contact: Callback<ContactAttempt>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let start = move |channel: ContactChannel| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        on_contact.run(ContactAttempt {
            listing_id,
            channel,
            form: ContactForm {
                name: name.get_untracked(),
                email: email.get_untracked(),
                message: message.get_untracked(),
            },
            busy,
        });
    };

    view! {
        <div class="contact-agent">
            <h4 class="contact-agent__title">"Contact Agent"</h4>
            <input
                class="field__input"
                type="text"
                placeholder="Your Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="field__input"
                type="email"
                placeholder="Your Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                class="field__input"
                rows="4"
                placeholder="Your Message"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <div class="contact-agent__actions">
                <button class="btn btn--call" disabled=move || busy.get() on:click=move |_| start(ContactChannel::Call)>
                    "Call Agent"
                </button>
                <button
                    class="btn btn--whatsapp"
                    disabled=move || busy.get()
                    on:click=move |_| start(ContactChannel::Whatsapp)
                >
                    "WhatsApp Agent"
                </button>
                <button class="btn btn--email" disabled=move || busy.get() on:click=move |_| start(ContactChannel::Email)>
                    "Email Agent"
                </button>
            </div>
        </div>
    }
}
