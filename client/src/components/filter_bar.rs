//! Max-price and location search inputs.

use leptos::prelude::*;

use crate::state::listings::ListingsState;

#[component]
pub fn FilterBar(listings: RwSignal<ListingsState>, on_search: Callback<()>) -> impl IntoView {
    view! {
        <section class="panel filter-bar">
            <h2 class="panel__title">"Search Properties"</h2>
            <form
                class="filter-bar__row"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_search.run(());
                }
            >
                <input
                    class="field__input"
                    type="number"
                    min="0"
                    placeholder="Max Price (AED)"
                    prop:value=move || listings.with(|s| s.filters.price_max.clone())
                    on:input=move |ev| listings.update(|s| s.filters.price_max = event_target_value(&ev))
                />
                <input
                    class="field__input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || listings.with(|s| s.filters.location.clone())
                    on:input=move |ev| listings.update(|s| s.filters.location = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || listings.with(|s| s.loading)>
                    "Search"
                </button>
            </form>
        </section>
    }
}
