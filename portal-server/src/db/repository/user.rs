//! User Repository

use std::sync::Arc;

use super::{RepoError, RepoResult};
use crate::db::PortalStore;
use crate::db::models::User;

const RESOURCE: &str = "user";

/// Credential store lookup over the seeded user collection
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<PortalStore>,
}

impl UserRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all users
    pub fn find_all(&self) -> Vec<User> {
        self.store.users.read().clone()
    }

    /// Find user by id
    pub fn find_by_id(&self, id: u64) -> Option<User> {
        self.store.users.read().iter().find(|u| u.id == id).cloned()
    }

    /// Find user by email (exact, case-sensitive)
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.store
            .users
            .read()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Insert a seeded user, assigning the next sequential id
    pub fn insert(&self, mut user: User) -> RepoResult<User> {
        if self.find_by_email(&user.email).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                user.email
            )));
        }
        user.id = self.store.next_id(RESOURCE);
        self.store.users.write().push(user.clone());
        Ok(user)
    }
}
