use crate::config::{Config, UserEntry};
use crate::types::Role;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use subtle::ConstantTimeEq;
use tracing::warn;

/// Decides which role, if any, a username/password pair grants.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

const LEGACY_TABLE: [(&str, &str, Role); 3] = [
    ("root", "1234", Role::Admin),
    ("user1", "1234", Role::StandardUser),
    ("user2", "12345", Role::StandardUser),
];

/// The built-in plaintext table, used when no users are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyCredentials;

impl CredentialVerifier for LegacyCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        LEGACY_TABLE
            .iter()
            .find(|(user, pass, _)| {
                let user_ok = user.as_bytes().ct_eq(username.as_bytes());
                let pass_ok = pass.as_bytes().ct_eq(password.as_bytes());
                bool::from(user_ok & pass_ok)
            })
            .map(|(_, _, role)| *role)
    }
}

/// Users from configuration, each carrying an Argon2 PHC hash.
#[derive(Debug, Clone)]
pub struct HashedCredentials {
    users: Vec<UserEntry>,
}

impl HashedCredentials {
    pub fn new(users: Vec<UserEntry>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for HashedCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        let entry = self
            .users
            .iter()
            .find(|u| bool::from(u.username.as_bytes().ct_eq(username.as_bytes())))?;
        let parsed = PasswordHash::new(&entry.password_hash)
            .inspect_err(|e| {
                warn!(username = %entry.username, error = %e, "malformed password hash");
            })
            .ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
            .then_some(entry.role)
    }
}

/// Hashed users when any are configured, otherwise the legacy table.
pub fn from_config(cfg: &Config) -> Box<dyn CredentialVerifier> {
    if cfg.users.is_empty() {
        warn!("no users configured; falling back to the built-in credential table");
        Box::new(LegacyCredentials)
    } else {
        Box::new(HashedCredentials::new(cfg.users.clone()))
    }
}
