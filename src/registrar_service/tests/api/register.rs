use fake::{
    Fake,
    faker::internet::en::{SafeEmail, Username},
};
use registrar_adapters::{email::SentEmail, persistence::InMemoryUserRepository};
use registrar_core::{User, UserRepository};
use secrecy::ExposeSecret;

use crate::helpers::{Outcome, TestApp};

const WELCOME_MESSAGE: &str =
    "Welcome, username! Let me explain at length how to get started using this service! ...";

#[test]
fn valid_registration_is_stored_announced_and_welcomed() {
    let app = TestApp::new();

    app.register("username", "securepassword", "user@example.com");

    let expected = User::new("username", "securepassword", "user@example.com");
    assert!(app.users.exists("username"));
    assert_eq!(app.users.users(), vec![expected.clone()]);
    assert_eq!(app.recorder.outcomes(), vec![Outcome::Registered(expected)]);
    assert_eq!(
        app.email_client.sent(),
        vec![SentEmail {
            to: "user@example.com".to_string(),
            from: "us@example.org".to_string(),
            message: WELCOME_MESSAGE.to_string(),
        }]
    );
}

#[test]
fn registered_user_matches_the_inputs_verbatim() {
    let app = TestApp::new();
    let username: String = Username().fake();
    let email: String = SafeEmail().fake();

    app.register(&username, "correct horse battery staple", &email);

    let stored = app.users.users();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].username(), username);
    assert_eq!(stored[0].email(), email);
    assert_eq!(
        stored[0].password().expose_secret(),
        "correct horse battery staple"
    );
}

#[test]
fn registration_with_an_empty_field_is_rejected() {
    for (username, password, email) in [
        ("", "securepassword", "user@example.com"),
        ("username", "", "user@example.com"),
        ("username", "securepassword", ""),
    ] {
        let app = TestApp::new();

        app.register(username, password, email);

        assert!(!app.users.exists("username"));
        assert!(app.users.is_empty());
        assert_eq!(app.recorder.outcomes(), vec![Outcome::Rejected]);
        assert!(app.email_client.sent().is_empty());
    }
}

#[test]
fn registration_with_a_short_password_is_rejected() {
    let app = TestApp::new();

    app.register("username", "short", "user@example.com");

    assert!(app.users.is_empty());
    assert_eq!(app.recorder.outcomes(), vec![Outcome::Rejected]);
    assert!(app.email_client.sent().is_empty());
}

#[test]
fn registration_of_an_existing_username_is_rejected() {
    let users = InMemoryUserRepository::new();
    users.save(User::new(
        "existinguser",
        "securepassword",
        "first@example.com",
    ));
    let app = TestApp::with_users(users);

    app.register("existinguser", "securepassword", "user@example.com");

    assert_eq!(app.users.len(), 1);
    assert_eq!(app.recorder.outcomes(), vec![Outcome::Rejected]);
    assert!(app.email_client.sent().is_empty());
}

#[test]
fn repeating_a_registration_fails_the_second_time() {
    let app = TestApp::new();

    app.register("username", "securepassword", "user@example.com");
    app.register("username", "securepassword", "user@example.com");

    let expected = User::new("username", "securepassword", "user@example.com");
    assert_eq!(app.users.users(), vec![expected.clone()]);
    assert_eq!(
        app.recorder.outcomes(),
        vec![Outcome::Registered(expected), Outcome::Rejected]
    );
    assert_eq!(app.email_client.sent().len(), 1);
}

#[test]
fn service_exposes_the_shared_repository() {
    let app = TestApp::new();

    app.register("username", "securepassword", "user@example.com");

    assert!(app.service.users().exists("username"));
}
