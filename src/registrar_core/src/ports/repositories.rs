use std::sync::Arc;

use crate::domain::user::User;

/// Persistence boundary for registered users.
///
/// Implementations are plain stores. Username uniqueness is a registration
/// rule checked through [`UserRepository::exists`] before anything is
/// saved, so `save` accepts whatever it is handed, duplicates included.
pub trait UserRepository: Send + Sync {
    /// Whether a user with exactly this username (case-sensitive) was saved.
    fn exists(&self, username: &str) -> bool;

    /// Appends the user to the store.
    fn save(&self, user: User);
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn exists(&self, username: &str) -> bool {
        (**self).exists(username)
    }

    fn save(&self, user: User) {
        (**self).save(user)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Arc<R> {
    fn exists(&self, username: &str) -> bool {
        (**self).exists(username)
    }

    fn save(&self, user: User) {
        (**self).save(user)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Box<R> {
    fn exists(&self, username: &str) -> bool {
        (**self).exists(username)
    }

    fn save(&self, user: User) {
        (**self).save(user)
    }
}
