//! Credential hashing with Argon2id
//!
//! Production implementation of the [`CredentialHasher`]
//! seam. Each hash gets a fresh random salt and is emitted as a PHC string,
//! so `verify` needs nothing but the stored hash itself.
//!
//! [`CredentialHasher`]: crate::core::traits::CredentialHasher

use crate::core::traits::CredentialHasher;
use crate::types::CoreError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Argon2id credential hasher with default cost parameters
///
/// The default Argon2id parameters are deliberately slow; that cost is the
/// brute-force resistance the rest of the system relies on.
#[derive(Debug, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a hasher with the default Argon2id parameters
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|_| CoreError::HashingFailed)?
            .to_string();

        Ok(hash)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CoreError> {
        // An unparseable stored hash is an operational fault, not a wrong PIN.
        let parsed = PasswordHash::new(hash).map_err(|_| CoreError::HashingFailed)?;

        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
