//! Greeting for the signed-in user plus the agent verification notice.

use leptos::prelude::*;

use crate::net::types::{Role, User};

#[component]
pub fn WelcomeBanner(user: User) -> impl IntoView {
    let is_agent = user.role == Role::Agent;
    let verified = user.verified;
    view! {
        <div class="welcome-banner">
            <h2 class="welcome-banner__title">
                {format!("Welcome, {} ({})", user.email, user.role.as_str())}
            </h2>
            <Show when=move || is_agent && !verified>
                <p class="welcome-banner__notice welcome-banner__notice--pending">
                    "Your agent account is not yet verified."
                </p>
            </Show>
            <Show when=move || is_agent && verified>
                <p class="welcome-banner__notice welcome-banner__notice--verified">
                    "You are a verified agent. Create a listing below."
                </p>
            </Show>
        </div>
    }
}
