use futures::executor::block_on;

use super::*;
use crate::services::fakes::{Call, FakeApi, listing, rejected};
use crate::state::listings::{DraftField, PRICE_REQUIRED};

fn villa() -> ListingDraft {
    ListingDraft {
        title: "Luxury Villa".to_owned(),
        price: "1000000".to_owned(),
        location: "Dubai Marina".to_owned(),
        description: "Sea view".to_owned(),
    }
}

// =============================================================
// refresh / apply_fetch
// =============================================================

#[test]
fn refresh_with_no_filters_sends_none() {
    let api = FakeApi::default();
    block_on(refresh(&api, "tok", &ListingFilters::default())).unwrap();
    assert_eq!(
        api.calls(),
        vec![Call::Listings { token: "tok".to_owned(), filters: ListingFilters::default() }]
    );
}

#[test]
fn apply_fetch_replaces_items() {
    let mut state = ListingsState { items: vec![listing(9, "Old")], loading: true, ..ListingsState::default() };
    let toast = apply_fetch(&mut state, Ok(vec![listing(1, "New")]));
    assert_eq!(toast, None);
    assert_eq!(state.items, vec![listing(1, "New")]);
    assert!(!state.loading);
}

#[test]
fn apply_fetch_failure_keeps_items_and_reports() {
    let mut state = ListingsState { items: vec![listing(9, "Old")], loading: true, ..ListingsState::default() };
    let toast = apply_fetch(&mut state, Err(rejected(500, "boom")));
    assert_eq!(toast, Some(Toast::error(FETCH_FAILED)));
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
}

// =============================================================
// create
// =============================================================

#[test]
fn invalid_draft_is_not_submitted() {
    let api = FakeApi::default();
    let draft = ListingDraft { price: "0".to_owned(), ..villa() };
    let outcome = block_on(create(&api, "tok", &draft, &ListingFilters::default()));
    let CreateOutcome::Invalid(errors) = &outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.get(&DraftField::Price), Some(&PRICE_REQUIRED));
    assert_eq!(outcome.toast(), None);
    assert!(api.calls().is_empty());
}

#[test]
fn created_listing_appears_in_follow_up_fetch() {
    let api = FakeApi::default();
    let outcome = block_on(create(&api, "tok", &villa(), &ListingFilters::default()));

    let CreateOutcome::Created { listings } = &outcome else {
        panic!("expected creation, got {outcome:?}");
    };
    let items = listings.as_ref().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Luxury Villa");
    assert!(matches!(&api.calls()[0], Call::CreateListing { listing, .. } if listing.location == "Dubai Marina"));
    assert!(matches!(&api.calls()[1], Call::Listings { .. }));
}

#[test]
fn apply_create_success_clears_draft_and_stores_items() {
    let api = FakeApi::default();
    let mut state = ListingsState { draft: villa(), submitting: true, ..ListingsState::default() };
    let outcome = block_on(create(&api, "tok", &state.draft.clone(), &ListingFilters::default()));

    let toast = apply_create(&mut state, outcome);

    assert_eq!(toast, Some(Toast::success(CREATE_OK)));
    assert_eq!(state.draft, ListingDraft::default());
    assert_eq!(state.items.len(), 1);
    assert!(!state.submitting);
}

#[test]
fn apply_create_invalid_stores_errors_and_keeps_draft() {
    let mut state = ListingsState { draft: ListingDraft::default(), ..ListingsState::default() };
    let outcome = CreateOutcome::Invalid(state.draft.validate());
    assert_eq!(apply_create(&mut state, outcome), None);
    assert_eq!(state.form_errors.len(), 3);
}

#[test]
fn server_rejection_keeps_draft_and_surfaces_message() {
    let api = FakeApi { create_error: Some(rejected(403, "Agent not verified")), ..FakeApi::default() };
    let mut state = ListingsState { draft: villa(), ..ListingsState::default() };
    let outcome = block_on(create(&api, "tok", &state.draft.clone(), &ListingFilters::default()));

    assert_eq!(outcome, CreateOutcome::Failed("Agent not verified".to_owned()));
    let toast = apply_create(&mut state, outcome);
    assert_eq!(toast, Some(Toast::error("Agent not verified")));
    assert_eq!(state.draft, villa());
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn failed_refresh_after_create_still_reports_success() {
    let api = FakeApi { listings_error: Some(ApiError::Network("offline".to_owned())), ..FakeApi::default() };
    let mut state = ListingsState { draft: villa(), loading: true, ..ListingsState::default() };
    let outcome = block_on(create(&api, "tok", &villa(), &ListingFilters::default()));
    assert_eq!(apply_create(&mut state, outcome), Some(Toast::success(CREATE_OK)));
    assert_eq!(state.draft, ListingDraft::default());
    assert!(!state.loading);
}
