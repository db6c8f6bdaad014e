// tests/session_gate.rs
//
// The admin gate: a boolean flipped by a delegated credential check.
//
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use citybus::session::{CredentialStore, SessionGate, StaticCredentials};

#[test]
fn login_flips_admin_on_match() {
    let mut gate = SessionGate::new(Box::new(StaticCredentials::new("admin", "secret")));
    assert!(!gate.is_admin());

    assert!(gate.login("admin", "secret"));
    assert!(gate.is_admin());
}

#[test]
fn wrong_credentials_are_a_silent_false() {
    let mut gate = SessionGate::new(Box::new(StaticCredentials::new("admin", "secret")));

    assert!(!gate.login("admin", "wrong"));
    assert!(!gate.login("someone", "secret"));
    assert!(!gate.is_admin());

    // A failure never revokes an earlier success.
    assert!(gate.login("admin", "secret"));
    assert!(!gate.login("admin", "wrong"));
    assert!(gate.is_admin());
}

#[test]
fn logout_is_unconditional() {
    let mut gate = SessionGate::new(Box::new(StaticCredentials::new("admin", "secret")));

    // Safe while already logged out.
    gate.logout();
    assert!(!gate.is_admin());

    assert!(gate.login("admin", "secret"));
    gate.logout();
    assert!(!gate.is_admin());
}

#[test]
fn credential_check_is_delegated() {
    struct Counting {
        calls: Arc<AtomicUsize>,
    }
    impl CredentialStore for Counting {
        fn verify(&self, username: &str, _password: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            username == "root"
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let mut gate = SessionGate::new(Box::new(Counting {
        calls: calls.clone(),
    }));

    assert!(!gate.login("guest", "x"));
    assert!(gate.login("root", "x"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn credentials_compare_exactly() {
    let creds = StaticCredentials::new("Admin", "pass word");
    assert!(creds.verify("Admin", "pass word"));
    // No trimming, no case folding.
    assert!(!creds.verify("admin", "pass word"));
    assert!(!creds.verify("Admin", "pass word "));
}
