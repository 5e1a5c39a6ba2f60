//! Listing collection, search filters and the draft listing form.
//!
//! DESIGN
//! ======
//! Fetched collections replace `items` wholesale; nothing is merged or cached
//! beyond the latest snapshot. Draft edits go through small setters so every
//! form mutation is an explicit, synchronous update of this record.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use std::collections::BTreeMap;

use crate::net::types::{Listing, NewListing};

/// Search criteria re-sent as query parameters on every fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilters {
    /// Raw text of the max-price input.
    pub price_max: String,
    /// Location substring.
    pub location: String,
}

/// Draft fields that carry validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DraftField {
    Title,
    Price,
    Location,
}

/// Field-level validation errors; submission is blocked unless empty.
pub type FormErrors = BTreeMap<DraftField, &'static str>;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const PRICE_REQUIRED: &str = "Valid price is required";
pub const LOCATION_REQUIRED: &str = "Location is required";

/// Unsaved listing form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    /// Raw text of the price input; parsed only on validation and submit.
    pub price: String,
    pub location: String,
    pub description: String,
}

impl ListingDraft {
    /// Check presence of title/location and a positive, finite price.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(DraftField::Title, TITLE_REQUIRED);
        }
        if !parse_price_input(&self.price).is_some_and(|p| p > 0.0) {
            errors.insert(DraftField::Price, PRICE_REQUIRED);
        }
        if self.location.trim().is_empty() {
            errors.insert(DraftField::Location, LOCATION_REQUIRED);
        }
        errors
    }

    /// Request body for a draft that passed `validate`.
    pub fn to_new_listing(&self) -> Option<NewListing> {
        if !self.validate().is_empty() {
            return None;
        }
        Some(NewListing {
            title: self.title.trim().to_owned(),
            price: parse_price_input(&self.price)?,
            location: self.location.trim().to_owned(),
            description: self.description.trim().to_owned(),
        })
    }
}

/// Parse the price input; blank or non-numeric text yields `None`.
pub fn parse_price_input(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Listings state shared through context as `RwSignal<ListingsState>`.
#[derive(Clone, Debug, Default)]
pub struct ListingsState {
    pub items: Vec<Listing>,
    pub filters: ListingFilters,
    pub draft: ListingDraft,
    pub form_errors: FormErrors,
    pub loading: bool,
    pub submitting: bool,
}

impl ListingsState {
    /// Replace the collection with a fresh snapshot.
    pub fn replace_items(&mut self, items: Vec<Listing>) {
        self.items = items;
        self.loading = false;
    }

    /// Reset the form after a successful create.
    pub fn clear_draft(&mut self) {
        self.draft = ListingDraft::default();
        self.form_errors.clear();
    }

    /// Drop everything tied to the signed-out user. Filters survive.
    pub fn clear_for_logout(&mut self) {
        self.items.clear();
        self.clear_draft();
        self.loading = false;
        self.submitting = false;
    }

    pub fn error_for(&self, field: DraftField) -> Option<&'static str> {
        self.form_errors.get(&field).copied()
    }
}
