pub mod credentials;

pub use credentials::{CredentialVerifier, HashedCredentials, LegacyCredentials};
