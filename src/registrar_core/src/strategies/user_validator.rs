/// Admission policy for registration requests.
///
/// A validator owns every business rule deciding whether a request may
/// become a [`User`](crate::User). Rejection is an ordinary outcome and is
/// reported only through the boolean result.
///
/// # Implementation Note
///
/// Validators may consult a [`UserRepository`](crate::UserRepository) but
/// must never write to it.
pub trait UserValidator: Send + Sync {
    fn is_valid(&self, username: &str, password: &str, email: &str) -> bool;
}

impl<V: UserValidator + ?Sized> UserValidator for &V {
    fn is_valid(&self, username: &str, password: &str, email: &str) -> bool {
        (**self).is_valid(username, password, email)
    }
}

impl<V: UserValidator + ?Sized> UserValidator for Box<V> {
    fn is_valid(&self, username: &str, password: &str, email: &str) -> bool {
        (**self).is_valid(username, password, email)
    }
}
