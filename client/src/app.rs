//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_URL_META, api_base_url};
use crate::pages::home::HomePage;
use crate::services::PortalServices;
use crate::state::{listings::ListingsState, session::SessionState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_url` is embedded as a meta tag and read back by the browser build.
pub fn shell(options: LeptosOptions, api_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and backend services, then routes to
/// the single home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(ListingsState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(PortalServices::browser(&api_base_url()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Property Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
