//! Sticky site header with the sign-in/register toggle or logout action.

use leptos::prelude::*;

use crate::state::session::AuthMode;

#[component]
pub fn SiteHeader(
    signed_in: Signal<bool>,
    mode: Signal<AuthMode>,
    on_mode: Callback<AuthMode>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <h1 class="site-header__brand">"Property Portal"</h1>
                <nav class="site-header__nav">
                    <a href="#" class="site-header__link">"Buy"</a>
                    <a href="#" class="site-header__link">"Rent"</a>
                    <a href="#" class="site-header__link">"Agents"</a>
                    <Show
                        when=move || signed_in.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="btn site-header__toggle"
                                    class:btn--primary=move || mode.get() == AuthMode::SignIn
                                    on:click=move |_| on_mode.run(AuthMode::SignIn)
                                >
                                    "Sign In"
                                </button>
                                <button
                                    class="btn site-header__toggle"
                                    class:btn--primary=move || mode.get() == AuthMode::Register
                                    on:click=move |_| on_mode.run(AuthMode::Register)
                                >
                                    "Register"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary site-header__logout" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
