use std::sync::{Arc, Mutex};

use registrar_adapters::{
    email::MockEmailClient, persistence::InMemoryUserRepository,
};
use registrar_application::{CompositeListener, WelcomeEmail};
use registrar_core::{RegistrationListener, User};
use registrar_service::RegistrationService;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Registered(User),
    Rejected,
}

#[derive(Debug, Default)]
pub struct OutcomeRecorder {
    outcomes: Mutex<Vec<Outcome>>,
}

impl OutcomeRecorder {
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl RegistrationListener for OutcomeRecorder {
    fn on_success(&self, user: &User) {
        self.outcomes
            .lock()
            .unwrap()
            .push(Outcome::Registered(user.clone()));
    }

    fn on_failure(&self) {
        self.outcomes.lock().unwrap().push(Outcome::Rejected);
    }
}

pub struct TestApp {
    pub service: RegistrationService<InMemoryUserRepository>,
    pub users: InMemoryUserRepository,
    pub email_client: MockEmailClient,
    pub recorder: Arc<OutcomeRecorder>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_users(InMemoryUserRepository::new())
    }

    pub fn with_users(users: InMemoryUserRepository) -> Self {
        let email_client = MockEmailClient::new();
        let recorder = Arc::new(OutcomeRecorder::default());

        let service = RegistrationService::new(
            users.clone(),
            email_client.clone(),
            WelcomeEmail::default(),
            CompositeListener::new().with(recorder.clone()),
        );

        Self {
            service,
            users,
            email_client,
            recorder,
        }
    }

    pub fn register(&self, username: &str, password: &str, email: &str) {
        self.service.register(username, password, email);
    }
}
