//! Read-only grid of listing cards.
//!
//! DESIGN
//! ======
//! Cards only render listing data; the contact panel is opened per card and
//! reports attempts upward so the page decides how to reach the backend.

use leptos::prelude::*;

use super::contact_agent::{ContactAgent, ContactAttempt};
use crate::net::types::Listing;
use crate::util::format::format_price;

#[component]
pub fn ListingsGrid(
    items: Signal<Vec<Listing>>,
    loading: Signal<bool>,
    on_contact: Callback<ContactAttempt>,
) -> impl IntoView {
    view! {
        <section class="listings">
            <h2 class="listings__title">"Properties"</h2>
            <Show when=move || !loading.get() fallback=move || view! { <p class="listings__status">"Loading listings..."</p> }>
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=move || view! { <p class="listings__status">"No properties match your search."</p> }
                >
                    <div class="listings__grid">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|listing| view! { <ListingCard listing=listing on_contact=on_contact/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
pub fn ListingCard(listing: Listing, on_contact: Callback<ContactAttempt>) -> impl IntoView {
    let show_contact = RwSignal::new(false);
    let listing_id = listing.id;

    view! {
        <article class="listing-card">
            <div class="listing-card__image" aria-hidden="true"></div>
            <div class="listing-card__body">
                <h3 class="listing-card__title">{listing.title}</h3>
                <p class="listing-card__price">{format_price(listing.price)}</p>
                <p class="listing-card__location">{listing.location}</p>
                <p class="listing-card__description">{listing.description}</p>
                <button class="link-button listing-card__contact" on:click=move |_| show_contact.update(|v| *v = !*v)>
                    {move || if show_contact.get() { "Hide Contact" } else { "Contact Agent" }}
                </button>
                <Show when=move || show_contact.get()>
                    <ContactAgent listing_id=listing_id on_contact=on_contact/>
                </Show>
            </div>
        </article>
    }
}
