//! Listing fetch and creation flows.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::api::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::Listing;
use crate::state::listings::{FormErrors, ListingDraft, ListingFilters, ListingsState};
use crate::state::toast::Toast;

pub const FETCH_FAILED: &str = "Failed to fetch listings";
pub const CREATE_OK: &str = "Listing created successfully";
pub const CREATE_FAILED: &str = "Failed to create listing";

/// Fetch the collection matching `filters`.
pub async fn refresh(api: &dyn PortalApi, token: &str, filters: &ListingFilters) -> Result<Vec<Listing>, ApiError> {
    api.listings(token, filters).await
}

/// Apply a fetch result to state; returns the toast to show on failure.
pub fn apply_fetch(state: &mut ListingsState, result: Result<Vec<Listing>, ApiError>) -> Option<Toast> {
    match result {
        Ok(items) => {
            state.replace_items(items);
            None
        }
        Err(e) => {
            leptos::logging::warn!("listing fetch failed: {e}");
            state.loading = false;
            Some(Toast::error(FETCH_FAILED))
        }
    }
}

/// Result of submitting the draft listing form.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    /// Client-side validation failed; nothing was sent.
    Invalid(FormErrors),
    /// Listing stored; `listings` is the follow-up refresh.
    Created { listings: Result<Vec<Listing>, ApiError> },
    Failed(String),
}

impl CreateOutcome {
    pub fn toast(&self) -> Option<Toast> {
        match self {
            Self::Invalid(_) => None,
            Self::Created { .. } => Some(Toast::success(CREATE_OK)),
            Self::Failed(message) => Some(Toast::error(message.clone())),
        }
    }
}

/// Validate and submit `draft`, then re-fetch the collection.
pub async fn create(
    api: &dyn PortalApi,
    token: &str,
    draft: &ListingDraft,
    filters: &ListingFilters,
) -> CreateOutcome {
    let Some(body) = draft.to_new_listing() else {
        return CreateOutcome::Invalid(draft.validate());
    };
    match api.create_listing(token, &body).await {
        Ok(()) => {
            leptos::logging::log!("listing created: {}", body.title);
            CreateOutcome::Created { listings: api.listings(token, filters).await }
        }
        Err(e) => {
            leptos::logging::warn!("listing create failed: {e}");
            CreateOutcome::Failed(e.user_message(CREATE_FAILED))
        }
    }
}

/// Apply a create outcome to state; returns the toast to show, if any.
pub fn apply_create(state: &mut ListingsState, outcome: CreateOutcome) -> Option<Toast> {
    state.submitting = false;
    match outcome {
        CreateOutcome::Invalid(errors) => {
            state.form_errors = errors;
            None
        }
        CreateOutcome::Created { listings } => {
            state.clear_draft();
            // The listing is stored; a failed refresh is only logged.
            let _ = apply_fetch(state, listings);
            Some(Toast::success(CREATE_OK))
        }
        failed @ CreateOutcome::Failed(_) => {
            state.form_errors.clear();
            failed.toast()
        }
    }
}
