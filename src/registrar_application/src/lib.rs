pub mod listeners;
pub mod use_cases;
pub mod validation;

pub use listeners::{
    composite::CompositeListener,
    log_registrations::LogUserRegistrations,
    welcome_email::{WelcomeEmail, WelcomeEmailListener},
};
pub use use_cases::register_user::RegisterUser;
pub use validation::user_validator_impl::{
    MIN_PASSWORD_LENGTH, RegistrationViolation, UserValidatorImpl,
};
