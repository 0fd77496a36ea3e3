use std::sync::{Arc, PoisonError, RwLock};

use registrar_core::{User, UserRepository};

/// Append-only list of users kept in process memory.
///
/// Clones share the same list. `save` never rejects anything, a duplicate
/// username saved directly is stored like any other user.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the stored users in insertion order
    pub fn users(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn exists(&self, username: &str) -> bool {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|u| u.username() == username)
    }

    #[tracing::instrument(name = "InMemoryUserRepository::save", skip_all)]
    fn save(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user);
    }
}
