//! Namespace selection state.
//!
//! The selection is the one durable piece of console state besides the auth
//! token. The context reads it from the injected store on load, keeps the
//! known-namespace list cached between refreshes, and clears a selection
//! that no longer exists server-side. It never pushes refreshes to
//! consumers; a page that depends on the selection re-runs its own load.

use std::sync::Arc;

use courier_client_core::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{NamespaceItem, PageQuery};

/// Refresh fetches at most this many namespaces; tenancy counts beyond this
/// are out of scope for the console switcher.
pub const REFRESH_PAGE_SIZE: u32 = 100;

pub struct NamespaceContext {
    store: Arc<dyn SessionStore>,
    current: Option<String>,
    namespaces: Vec<NamespaceItem>,
    loading: bool,
}

impl NamespaceContext {
    /// Loads the persisted selection from the store.
    #[must_use]
    pub fn load(store: Arc<dyn SessionStore>) -> Self {
        let current = store.current_namespace();
        Self {
            store,
            current,
            namespaces: Vec::new(),
            loading: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn namespaces(&self) -> &[NamespaceItem] {
        &self.namespaces
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Replaces the cached namespace list from the server. A refresh failure
    /// keeps the existing list and selection; stale-but-available beats
    /// blanking the switcher.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.loading = true;
        let result = client
            .namespaces()
            .list(&PageQuery::page(1, REFRESH_PAGE_SIZE))
            .await;
        self.loading = false;

        match result {
            Ok(page) => self.absorb(page.items),
            Err(error) => {
                tracing::warn!(%error, "namespace refresh failed; keeping cached list");
                Err(error)
            }
        }
    }

    /// Updates the selection in memory and in the store, synchronously.
    /// Consumers are expected to reload their own data afterwards.
    pub fn set_current(&mut self, name: Option<&str>) -> Result<(), ApiError> {
        match name {
            Some(name) => {
                self.current = Some(name.to_string());
                self.store.set_current_namespace(name)?;
            }
            None => {
                self.current = None;
                self.store.clear_current_namespace()?;
            }
        }
        Ok(())
    }

    fn absorb(&mut self, items: Vec<NamespaceItem>) -> Result<(), ApiError> {
        self.namespaces = items;
        if let Some(current) = self.current.clone() {
            let exists = self.namespaces.iter().any(|ns| ns.name == current);
            if !exists {
                tracing::info!(namespace = %current, "selected namespace vanished; clearing selection");
                self.current = None;
                self.store.clear_current_namespace()?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for NamespaceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespaceContext")
            .field("current", &self.current)
            .field("namespaces", &self.namespaces.len())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
