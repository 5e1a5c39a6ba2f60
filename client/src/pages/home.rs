//! Home page: the single composition root of the portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-out visitors see the auth form; signed-in users see the welcome
//! banner, the listing form (verified agents only), filters and the grid.
//! All handlers come from `home_actions`.

use leptos::prelude::*;

use super::home_actions::HomeActions;
use crate::components::auth_form::{AuthFields, AuthForm};
use crate::components::contact_agent::ContactAttempt;
use crate::components::filter_bar::FilterBar;
use crate::components::listing_form::ListingForm;
use crate::components::listings_grid::ListingsGrid;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::toast_view::ToastView;
use crate::components::welcome_banner::WelcomeBanner;
use crate::state::session::AuthMode;

#[component]
pub fn HomePage() -> impl IntoView {
    let actions = HomeActions::from_context();
    let session = actions.session;
    let listings = actions.listings;
    let auth_fields = AuthFields::new();

    // Bootstrap from a persisted token once the page is live in the browser.
    Effect::new(move |ran: Option<()>| {
        if ran.is_none() {
            actions.restore();
        }
    });

    let on_mode = Callback::new(move |mode: AuthMode| actions.set_mode(mode));
    let on_logout = Callback::new(move |()| actions.logout());
    let on_auth_submit = Callback::new(move |()| actions.submit_auth(auth_fields));
    let on_create = Callback::new(move |()| actions.create_listing());
    let on_search = Callback::new(move |()| actions.search());
    let on_contact = Callback::new(move |attempt: ContactAttempt| actions.contact(attempt));

    let signed_in = Signal::derive(move || session.with(|s| s.is_authenticated()));
    let mode = Signal::derive(move || session.with(|s| s.mode));
    let auth_busy = Signal::derive(move || session.with(|s| s.submitting));
    let toast = Signal::derive(move || actions.toast.with(|t| t.current.clone()));
    let items = Signal::derive(move || listings.with(|l| l.items.clone()));
    let loading = Signal::derive(move || listings.with(|l| l.loading));

    view! {
        <div class="portal">
            <ToastView toast=toast/>
            <SiteHeader signed_in=signed_in mode=mode on_mode=on_mode on_logout=on_logout/>
            <main class="portal__main">
                <Show
                    when=move || signed_in.get()
                    fallback=move || {
                        if session.with(|s| s.restoring) {
                            view! { <p class="portal__status">"Restoring your session..."</p> }.into_any()
                        } else {
                            view! {
                                <AuthForm
                                    fields=auth_fields
                                    mode=mode
                                    busy=auth_busy
                                    on_submit=on_auth_submit
                                    on_mode=on_mode
                                />
                            }
                                .into_any()
                        }
                    }
                >
                    {move || session.with(|s| s.user().cloned()).map(|user| view! { <WelcomeBanner user=user/> })}
                    <Show when=move || session.with(|s| s.can_create_listings())>
                        <ListingForm listings=listings on_submit=on_create/>
                    </Show>
                    <FilterBar listings=listings on_search=on_search/>
                    <ListingsGrid items=items loading=loading on_contact=on_contact/>
                </Show>
            </main>
            <SiteFooter/>
        </div>
    }
}
