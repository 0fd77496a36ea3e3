use registrar_core::{UserRepository, UserValidator};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 14;

/// The registration rule a request broke first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationViolation {
    /// Username, password or email is empty
    EmptyField,
    /// A user with the same username is already stored
    UsernameTaken,
    /// Password shorter than [`MIN_PASSWORD_LENGTH`]
    PasswordTooShort,
}

/// Reference registration policy.
///
/// Rules are checked in order and the first broken one decides:
/// 1. username, password and email are all non-empty
/// 2. the username is not already taken
/// 3. the password has at least [`MIN_PASSWORD_LENGTH`] characters
///
/// The repository is only ever queried through `exists`.
pub struct UserValidatorImpl<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> UserValidatorImpl<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }

    pub fn first_violation(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Option<RegistrationViolation> {
        if username.is_empty() || password.is_empty() || email.is_empty() {
            return Some(RegistrationViolation::EmptyField);
        }
        if self.users.exists(username) {
            return Some(RegistrationViolation::UsernameTaken);
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Some(RegistrationViolation::PasswordTooShort);
        }
        None
    }
}

impl<R> UserValidator for UserValidatorImpl<R>
where
    R: UserRepository,
{
    fn is_valid(&self, username: &str, password: &str, email: &str) -> bool {
        match self.first_violation(username, password, email) {
            Some(violation) => {
                tracing::debug!(?violation, "Registration request violates a rule");
                false
            }
            None => true,
        }
    }
}
