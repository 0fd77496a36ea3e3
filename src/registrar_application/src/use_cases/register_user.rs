use std::sync::{Mutex, PoisonError};

use registrar_core::{RegistrationListener, User, UserRepository, UserValidator};

/// Register user use case - validates, persists and announces a new account
///
/// The outcome is reported only through the listener. `execute` never
/// fails: a rejected request is an ordinary `on_failure` notification.
pub struct RegisterUser<R, V, L>
where
    R: UserRepository,
    V: UserValidator,
    L: RegistrationListener,
{
    users: R,
    validator: V,
    listener: L,
    // Held across validate + save so two callers cannot both pass the
    // uniqueness check for the same username.
    admission: Mutex<()>,
}

impl<R, V, L> RegisterUser<R, V, L>
where
    R: UserRepository,
    V: UserValidator,
    L: RegistrationListener,
{
    pub fn new(users: R, validator: V, listener: L) -> Self {
        Self {
            users,
            validator,
            listener,
            admission: Mutex::new(()),
        }
    }

    pub fn users(&self) -> &R {
        &self.users
    }

    /// Execute the register user use case
    ///
    /// # Arguments
    /// * `username` - Requested username, must not already be taken
    /// * `password` - Requested password
    /// * `email` - Address the account is registered under
    ///
    /// At most one `save` and exactly one listener callback happen per call.
    #[tracing::instrument(name = "RegisterUser::execute", skip(self, password))]
    pub fn execute(&self, username: &str, password: &str, email: &str) {
        match self.admit(username, password, email) {
            Some(user) => {
                tracing::info!("User registered");
                self.listener.on_success(&user);
            }
            None => {
                tracing::debug!("Registration rejected");
                self.listener.on_failure();
            }
        }
    }

    fn admit(&self, username: &str, password: &str, email: &str) -> Option<User> {
        let _admission = self
            .admission
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.validator.is_valid(username, password, email) {
            return None;
        }

        let user = User::new(username, password, email);
        self.users.save(user.clone());
        Some(user)
    }
}
