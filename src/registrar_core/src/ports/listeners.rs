use std::sync::Arc;

use crate::domain::user::User;

/// Observer of registration outcomes.
///
/// Listeners are called after the outcome is settled and cannot change it.
/// Whatever side effect a listener performs (email, logging, metrics) is its
/// own business, including handling its own failures.
pub trait RegistrationListener: Send + Sync {
    fn on_success(&self, user: &User);

    fn on_failure(&self);
}

impl<L: RegistrationListener + ?Sized> RegistrationListener for &L {
    fn on_success(&self, user: &User) {
        (**self).on_success(user)
    }

    fn on_failure(&self) {
        (**self).on_failure()
    }
}

impl<L: RegistrationListener + ?Sized> RegistrationListener for Box<L> {
    fn on_success(&self, user: &User) {
        (**self).on_success(user)
    }

    fn on_failure(&self) {
        (**self).on_failure()
    }
}

impl<L: RegistrationListener + ?Sized> RegistrationListener for Arc<L> {
    fn on_success(&self, user: &User) {
        (**self).on_success(user)
    }

    fn on_failure(&self) {
        (**self).on_failure()
    }
}
