use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailClientError {
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),
    #[error("Failed to deliver email: {0}")]
    DeliveryFailed(String),
}

/// Port trait for the outbound mail transport
pub trait EmailClient: Send + Sync {
    fn send(&self, to: &str, from: &str, message: &str) -> Result<(), EmailClientError>;
}

impl<E: EmailClient + ?Sized> EmailClient for &E {
    fn send(&self, to: &str, from: &str, message: &str) -> Result<(), EmailClientError> {
        (**self).send(to, from, message)
    }
}

impl<E: EmailClient + ?Sized> EmailClient for std::sync::Arc<E> {
    fn send(&self, to: &str, from: &str, message: &str) -> Result<(), EmailClientError> {
        (**self).send(to, from, message)
    }
}
