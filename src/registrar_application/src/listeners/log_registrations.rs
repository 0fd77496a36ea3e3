use registrar_core::{RegistrationListener, User};

/// Writes every registration outcome to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogUserRegistrations;

impl RegistrationListener for LogUserRegistrations {
    fn on_success(&self, user: &User) {
        tracing::info!(username = user.username(), "User '{}' registered", user.username());
    }

    fn on_failure(&self) {
        tracing::info!("User registration failed");
    }
}
