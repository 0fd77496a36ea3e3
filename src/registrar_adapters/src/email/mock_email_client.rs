use std::sync::{Arc, Mutex, PoisonError};

use registrar_core::{EmailClient, EmailClientError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub from: String,
    pub message: String,
}

/// Email client that keeps every message instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EmailClient for MockEmailClient {
    fn send(&self, to: &str, from: &str, message: &str) -> Result<(), EmailClientError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentEmail {
                to: to.to_string(),
                from: from.to_string(),
                message: message.to_string(),
            });
        Ok(())
    }
}
