use registrar_core::{RegistrationListener, User};

/// Fans every notification out to an ordered list of listeners.
///
/// Members are called in insertion order with the same arguments. Each
/// member handles its own failures; the composite does not aggregate them.
#[derive(Default)]
pub struct CompositeListener {
    listeners: Vec<Box<dyn RegistrationListener>>,
}

impl CompositeListener {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn with<L>(mut self, listener: L) -> Self
    where
        L: RegistrationListener + 'static,
    {
        self.push(listener);
        self
    }

    pub fn push<L>(&mut self, listener: L)
    where
        L: RegistrationListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl From<Vec<Box<dyn RegistrationListener>>> for CompositeListener {
    fn from(listeners: Vec<Box<dyn RegistrationListener>>) -> Self {
        Self { listeners }
    }
}

impl RegistrationListener for CompositeListener {
    fn on_success(&self, user: &User) {
        for listener in &self.listeners {
            listener.on_success(user);
        }
    }

    fn on_failure(&self) {
        for listener in &self.listeners {
            listener.on_failure();
        }
    }
}
