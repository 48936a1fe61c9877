//! Policy Repository

use std::sync::Arc;

use crate::db::PortalStore;
use crate::db::models::Policy;

/// Read-only access to the seeded policy catalog
#[derive(Clone)]
pub struct PolicyRepository {
    store: Arc<PortalStore>,
}

impl PolicyRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all policies
    pub fn find_all(&self) -> Vec<Policy> {
        self.store.policies.read().clone()
    }

    /// Find policy by id
    pub fn find_by_id(&self, id: u64) -> Option<Policy> {
        self.store
            .policies
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}
