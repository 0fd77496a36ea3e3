use registrar_core::{EmailClient, EmailClientError};

/// Email client that writes messages to the tracing log instead of a
/// mail server.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEmailClient;

impl LoggingEmailClient {
    pub fn new() -> Self {
        Self
    }
}

impl EmailClient for LoggingEmailClient {
    #[tracing::instrument(name = "Sending email", skip(self, message))]
    fn send(&self, to: &str, from: &str, message: &str) -> Result<(), EmailClientError> {
        if to.is_empty() {
            return Err(EmailClientError::InvalidRecipient(to.to_string()));
        }

        tracing::info!(%message, "Email sent");
        Ok(())
    }
}
