use registrar_core::{EmailClient, RegistrationListener, User};

pub const DEFAULT_SENDER: &str = "us@example.org";
pub const DEFAULT_TEMPLATE: &str =
    "Welcome, {username}! Let me explain at length how to get started using this service! ...";
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Sender address and body template of the welcome email.
///
/// The first `{username}` in the template is replaced by the new user's
/// username; the template is otherwise sent as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeEmail {
    sender: String,
    template: String,
}

impl WelcomeEmail {
    pub fn new(sender: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            template: template.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn render(&self, username: &str) -> String {
        self.template.replacen(USERNAME_PLACEHOLDER, username, 1)
    }
}

impl Default for WelcomeEmail {
    fn default() -> Self {
        Self::new(DEFAULT_SENDER, DEFAULT_TEMPLATE)
    }
}

/// Sends the welcome email to every newly registered user.
pub struct WelcomeEmailListener<E>
where
    E: EmailClient,
{
    email_client: E,
    message: WelcomeEmail,
}

impl<E> WelcomeEmailListener<E>
where
    E: EmailClient,
{
    pub fn new(email_client: E) -> Self {
        Self::with_message(email_client, WelcomeEmail::default())
    }

    pub fn with_message(email_client: E, message: WelcomeEmail) -> Self {
        Self {
            email_client,
            message,
        }
    }
}

impl<E> RegistrationListener for WelcomeEmailListener<E>
where
    E: EmailClient,
{
    #[tracing::instrument(name = "Sending welcome email", skip_all)]
    fn on_success(&self, user: &User) {
        let body = self.message.render(user.username());

        // The account exists either way; a lost welcome email is only logged.
        if let Err(e) = self
            .email_client
            .send(user.email(), self.message.sender(), &body)
        {
            tracing::error!(error = %e, username = user.username(), "Failed to send welcome email");
        }
    }

    fn on_failure(&self) {}
}
