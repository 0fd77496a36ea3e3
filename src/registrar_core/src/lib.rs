pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::user::User;

pub use ports::{
    listeners::RegistrationListener,
    repositories::UserRepository,
    services::{EmailClient, EmailClientError},
};

pub use strategies::user_validator::UserValidator;
