use secrecy::{ExposeSecret, Secret};

/// A registered account.
///
/// Only built once a registration request has passed validation, and never
/// mutated afterwards. Equality is structural over all three fields, the
/// password included, so two `User` values with the same data are
/// interchangeable.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password: Secret<String>,
    email: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
            email: email.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
            && self.email == other.email
    }
}

impl Eq for User {}
