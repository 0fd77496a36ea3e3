pub mod composite;
pub mod log_registrations;
pub mod welcome_email;
