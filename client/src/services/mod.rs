//! Framework-free orchestration of backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into these services from `spawn_local` tasks and apply the
//! returned outcomes to the reactive state. Services depend only on the
//! `PortalApi`, `TokenStore` and `Launcher` seams, never on signals.

pub mod contact;
pub mod listings;
pub mod session;

#[cfg(test)]
pub(crate) mod fakes;

use std::sync::Arc;

use crate::net::api::{HttpApi, PortalApi};
use crate::util::navigate::{BrowserLauncher, Launcher};
use crate::util::storage::{BrowserTokenStore, TokenStore};

/// Backend, storage and navigation handles provided to the page via context.
#[derive(Clone)]
pub struct PortalServices {
    pub api: Arc<dyn PortalApi + Send + Sync>,
    pub tokens: Arc<dyn TokenStore + Send + Sync>,
    pub launcher: Arc<dyn Launcher + Send + Sync>,
}

impl PortalServices {
    /// Browser-backed services talking to the backend at `base_url`.
    pub fn browser(base_url: &str) -> Self {
        Self {
            api: Arc::new(HttpApi::new(base_url)),
            tokens: Arc::new(BrowserTokenStore),
            launcher: Arc::new(BrowserLauncher),
        }
    }
}
