use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use stockroom::config::{Config, UserEntry};
use stockroom::service::credentials::{self, CredentialVerifier, HashedCredentials, LegacyCredentials};
use stockroom::types::Role;

fn phc(password: &str) -> String {
    let salt = SaltString::encode_b64(b"stockroom-test-salt").expect("failed to encode salt");
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("failed to hash password")
        .to_string()
}

#[test]
fn legacy_table_maps_each_known_pair() {
    let v = LegacyCredentials;
    assert_eq!(v.verify("root", "1234"), Some(Role::Admin));
    assert_eq!(v.verify("user1", "1234"), Some(Role::StandardUser));
    assert_eq!(v.verify("user2", "12345"), Some(Role::StandardUser));
}

#[test]
fn legacy_table_rejects_everything_else() {
    let v = LegacyCredentials;
    for (user, pass) in [
        ("root", "12345"),
        ("user2", "1234"),
        ("ROOT", "1234"),
        ("root ", "1234"),
        ("user1", ""),
        ("", ""),
        ("admin", "admin"),
    ] {
        assert_eq!(v.verify(user, pass), None, "{user:?}/{pass:?} should be rejected");
    }
}

#[test]
fn hashed_users_accept_only_matching_password() {
    let v = HashedCredentials::new(vec![
        UserEntry {
            username: "alice".to_string(),
            password_hash: phc("wonderland"),
            role: Role::Admin,
        },
        UserEntry {
            username: "bob".to_string(),
            password_hash: phc("builder"),
            role: Role::StandardUser,
        },
    ]);

    assert_eq!(v.verify("alice", "wonderland"), Some(Role::Admin));
    assert_eq!(v.verify("bob", "builder"), Some(Role::StandardUser));
    assert_eq!(v.verify("alice", "builder"), None);
    assert_eq!(v.verify("carol", "wonderland"), None);
}

#[test]
fn malformed_hash_rejects_without_panicking() {
    let v = HashedCredentials::new(vec![UserEntry {
        username: "alice".to_string(),
        password_hash: "not-a-phc-string".to_string(),
        role: Role::Admin,
    }]);
    assert_eq!(v.verify("alice", "not-a-phc-string"), None);
}

#[test]
fn configured_users_replace_the_legacy_table() {
    let legacy = credentials::from_config(&Config::default());
    assert_eq!(legacy.verify("root", "1234"), Some(Role::Admin));

    let cfg = Config {
        users: vec![UserEntry {
            username: "ops".to_string(),
            password_hash: phc("hunter2"),
            role: Role::StandardUser,
        }],
        ..Config::default()
    };
    let hashed = credentials::from_config(&cfg);
    assert_eq!(hashed.verify("ops", "hunter2"), Some(Role::StandardUser));
    assert_eq!(hashed.verify("root", "1234"), None);
}
