//! Static footer links.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__column">
                    <h3>"Property Portal"</h3>
                    <p class="site-footer__tagline">"Find your dream home with the leading property platform."</p>
                </div>
                <div class="site-footer__column">
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li><a href="#">"Buy"</a></li>
                        <li><a href="#">"Rent"</a></li>
                        <li><a href="#">"Agents"</a></li>
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h3>"Resources"</h3>
                    <ul>
                        <li><a href="#">"Mortgage Calculator"</a></li>
                        <li><a href="#">"Guides"</a></li>
                        <li><a href="#">"Contact Us"</a></li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}
