// src/session.rs
//
// Client-local admin session. This is a UI visibility toggle, not real
// authentication: there is no token, no expiry, and no server round-trip.
// The credential check is delegated to a collaborator so no secrets end up
// baked into the delivered binary.

use std::env;

use crate::config::consts::{ADMIN_PASS_ENV, ADMIN_USER_ENV};

/// Collaborator that answers "is this username/password pair valid".
pub trait CredentialStore: Send {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed pair, mainly for tests and stub wiring.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Reads the admin pair from the environment at startup.
/// With either variable missing or empty, every login fails.
pub struct EnvCredentials(Option<StaticCredentials>);

impl EnvCredentials {
    pub fn from_env() -> Self {
        let user = env::var(ADMIN_USER_ENV).unwrap_or_default();
        let pass = env::var(ADMIN_PASS_ENV).unwrap_or_default();
        if user.trim().is_empty() || pass.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(StaticCredentials::new(user, pass)))
        }
    }
}

impl CredentialStore for EnvCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        match &self.0 {
            Some(creds) => creds.verify(username, password),
            None => false,
        }
    }
}

/// In-memory admin flag for this process only. Nothing is persisted; a
/// restart is always a logged-out visitor.
pub struct SessionGate {
    admin: bool,
    store: Box<dyn CredentialStore>,
}

impl SessionGate {
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        Self {
            admin: false,
            store,
        }
    }

    /// Wrong credentials are a silent rejection: `false`, state unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.store.verify(username, password) {
            self.admin = true;
            logf!("Session: admin login ok");
            true
        } else {
            logd!("Session: admin login rejected");
            false
        }
    }

    /// Unconditional; safe to call when already logged out.
    pub fn logout(&mut self) {
        self.admin = false;
        logf!("Session: admin logout");
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
