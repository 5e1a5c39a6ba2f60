//! Listing creation form for verified agents.
//!
//! Field errors come from `ListingDraft::validate` and are shown under the
//! offending input. Image upload is intentionally rendered disabled.

use leptos::prelude::*;

use crate::state::listings::{DraftField, ListingsState};

#[component]
fn FieldError(listings: RwSignal<ListingsState>, field: DraftField) -> impl IntoView {
    move || {
        listings
            .with(|s| s.error_for(field))
            .map(|message| view! { <p class="field__error">{message}</p> })
    }
}

#[component]
pub fn ListingForm(listings: RwSignal<ListingsState>, on_submit: Callback<()>) -> impl IntoView {
    let has_error = move |field: DraftField| listings.with(|s| s.error_for(field).is_some());

    view! {
        <section class="panel listing-form">
            <h2 class="panel__title">"Create New Listing"</h2>
            <form
                class="listing-form__grid"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    if !listings.with_untracked(|s| s.submitting) {
                        on_submit.run(());
                    }
                }
            >
                <label class="field">
                    <span class="field__label">"Property Title"</span>
                    <input
                        class="field__input"
                        class:field__input--invalid=move || has_error(DraftField::Title)
                        type="text"
                        placeholder="e.g., Luxury Villa"
                        prop:value=move || listings.with(|s| s.draft.title.clone())
                        on:input=move |ev| listings.update(|s| s.draft.title = event_target_value(&ev))
                    />
                    <FieldError listings=listings field=DraftField::Title/>
                </label>
                <label class="field">
                    <span class="field__label">"Price (AED)"</span>
                    <input
                        class="field__input"
                        class:field__input--invalid=move || has_error(DraftField::Price)
                        type="number"
                        min="0"
                        placeholder="e.g., 1000000"
                        prop:value=move || listings.with(|s| s.draft.price.clone())
                        on:input=move |ev| listings.update(|s| s.draft.price = event_target_value(&ev))
                    />
                    <FieldError listings=listings field=DraftField::Price/>
                </label>
                <label class="field">
                    <span class="field__label">"Location"</span>
                    <input
                        class="field__input"
                        class:field__input--invalid=move || has_error(DraftField::Location)
                        type="text"
                        placeholder="e.g., Dubai Marina"
                        prop:value=move || listings.with(|s| s.draft.location.clone())
                        on:input=move |ev| listings.update(|s| s.draft.location = event_target_value(&ev))
                    />
                    <FieldError listings=listings field=DraftField::Location/>
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input"
                        rows="5"
                        placeholder="Describe the property..."
                        prop:value=move || listings.with(|s| s.draft.description.clone())
                        on:input=move |ev| listings.update(|s| s.draft.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span class="field__label">"Property Image"</span>
                    <input
                        class="field__input field__input--disabled"
                        type="file"
                        disabled=true
                        title="Image upload coming soon"
                    />
                    <p class="field__hint">"Image upload will be enabled in a future update."</p>
                </label>
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || listings.with(|s| s.submitting)
                >
                    {move || if listings.with(|s| s.submitting) { "Creating..." } else { "Create Listing" }}
                </button>
            </form>
        </section>
    }
}
