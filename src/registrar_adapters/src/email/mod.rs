pub mod logging_email_client;
pub mod mock_email_client;

pub use logging_email_client::LoggingEmailClient;
pub use mock_email_client::{MockEmailClient, SentEmail};
