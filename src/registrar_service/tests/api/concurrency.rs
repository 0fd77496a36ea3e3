use std::thread;

use crate::helpers::{Outcome, TestApp};

#[test]
fn concurrent_registrations_of_one_username_admit_a_single_user() {
    let app = TestApp::new();

    thread::scope(|scope| {
        for i in 0..32 {
            let app = &app;
            scope.spawn(move || {
                app.register(
                    "username",
                    "securepassword",
                    &format!("user{i}@example.com"),
                )
            });
        }
    });

    assert_eq!(app.users.len(), 1);
    let outcomes = app.recorder.outcomes();
    assert_eq!(outcomes.len(), 32);
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Registered(_)))
            .count(),
        1
    );
    assert_eq!(app.email_client.sent().len(), 1);
}

#[test]
fn concurrent_registrations_of_distinct_usernames_all_succeed() {
    let app = TestApp::new();

    thread::scope(|scope| {
        for i in 0..32 {
            let app = &app;
            scope.spawn(move || {
                app.register(
                    &format!("user{i}"),
                    "securepassword",
                    &format!("user{i}@example.com"),
                )
            });
        }
    });

    assert_eq!(app.users.len(), 32);
    assert!(
        app.recorder
            .outcomes()
            .iter()
            .all(|o| matches!(o, Outcome::Registered(_)))
    );
}
