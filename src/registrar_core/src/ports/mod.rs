pub mod listeners;
pub mod repositories;
pub mod services;
