use registrar_adapters::config::Settings;
use registrar_application::{
    CompositeListener, LogUserRegistrations, RegisterUser, UserValidatorImpl, WelcomeEmail,
    WelcomeEmailListener,
};
use registrar_core::{EmailClient, UserRepository};

/// Register user use case with the reference validator and a composite
/// listener.
pub type StandardRegisterUser<R> = RegisterUser<R, UserValidatorImpl<R>, CompositeListener>;

/// Composition root for user registration
pub struct RegistrationService<R>
where
    R: UserRepository + Clone,
{
    register_user: StandardRegisterUser<R>,
}

impl<R> RegistrationService<R>
where
    R: UserRepository + Clone,
{
    /// Wire a registration service around the given repository and email client
    ///
    /// # Arguments
    /// * `users` - Repository shared by the validator and the use case (must be Clone)
    /// * `email_client` - Transport for the welcome email
    /// * `welcome_email` - Sender and template of the welcome email
    /// * `observers` - Extra listeners, notified after the built-in ones
    ///
    /// # Note on Architecture
    /// Listeners run in this order: welcome email, registration log, then
    /// `observers` in their own insertion order.
    pub fn new<E>(
        users: R,
        email_client: E,
        welcome_email: WelcomeEmail,
        observers: CompositeListener,
    ) -> Self
    where
        E: EmailClient + 'static,
    {
        let listener = CompositeListener::new()
            .with(WelcomeEmailListener::with_message(
                email_client,
                welcome_email,
            ))
            .with(LogUserRegistrations)
            .with(observers);
        tracing::debug!(listeners = listener.len(), "Registration listeners wired");

        let validator = UserValidatorImpl::new(users.clone());

        Self {
            register_user: RegisterUser::new(users, validator, listener),
        }
    }

    /// Same as [`RegistrationService::new`] with the welcome email taken
    /// from `settings`
    pub fn from_settings<E>(
        users: R,
        email_client: E,
        settings: &Settings,
        observers: CompositeListener,
    ) -> Self
    where
        E: EmailClient + 'static,
    {
        Self::new(users, email_client, settings.welcome_email(), observers)
    }

    pub fn register(&self, username: &str, password: &str, email: &str) {
        self.register_user.execute(username, password, email);
    }

    pub fn users(&self) -> &R {
        self.register_user.users()
    }

    pub fn register_user(&self) -> &StandardRegisterUser<R> {
        &self.register_user
    }
}
