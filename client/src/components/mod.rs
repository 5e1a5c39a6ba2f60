//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are props-driven: they render the state handed to them and
//! report user intent through callbacks. Only `pages` talk to services.

pub mod auth_form;
pub mod contact_agent;
pub mod filter_bar;
pub mod listing_form;
pub mod listings_grid;
pub mod site_footer;
pub mod site_header;
pub mod toast_view;
pub mod welcome_banner;
