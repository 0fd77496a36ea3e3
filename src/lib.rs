//! # Registrar - User Registration Library
//!
//! This is a facade crate that re-exports all public APIs from the registration components.
//! Use this crate to get access to all registration functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `User`
//! - **Ports**: `UserRepository`, `UserValidator`, `RegistrationListener`, `EmailClient`
//! - **Use cases**: `RegisterUser`
//! - **Listeners**: `CompositeListener`, `WelcomeEmailListener`, `LogUserRegistrations`
//! - **Adapters**: `InMemoryUserRepository`, `LoggingEmailClient`, `MockEmailClient`, `Settings`
//! - **Service**: `RegistrationService` - wires everything together

// ============================================================================
// Core Domain Types and Ports
// ============================================================================

/// Core domain types and ports
pub mod core {
    pub use registrar_core::*;
}

pub use registrar_core::{
    EmailClient, EmailClientError, RegistrationListener, User, UserRepository, UserValidator,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases, policies and listeners
pub mod use_cases {
    pub use registrar_application::*;
}

pub use registrar_application::{
    CompositeListener, LogUserRegistrations, MIN_PASSWORD_LENGTH, RegisterUser,
    RegistrationViolation, UserValidatorImpl, WelcomeEmail, WelcomeEmailListener,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use registrar_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use registrar_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use registrar_adapters::config::*;
    }
}

pub use registrar_adapters::{
    config::{Settings, SettingsError},
    email::{LoggingEmailClient, MockEmailClient},
    persistence::InMemoryUserRepository,
};

// ============================================================================
// Registration Service (Composition Root)
// ============================================================================

pub use registrar_service::{RegistrationService, StandardRegisterUser};

/// Re-export secrecy for reading stored passwords
pub use secrecy::{ExposeSecret, Secret};
