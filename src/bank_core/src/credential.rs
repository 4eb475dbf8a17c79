//! Salted one-way sealing of account secrets.
//!
//! Secrets are hashed with Argon2id and kept as a PHC string
//! (`$argon2id$v=19$m=...$<salt>$<hash>`), so the cost parameters and the salt
//! travel with the hash and verification needs nothing else.

use std::fmt;
#[cfg(test)]
use std::cell::Cell;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::error::BankError;

fn hasher(params: Params) -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Hash `secret` under a fresh random salt.
    pub fn seal(secret: &str, params: &Params) -> Result<Self, BankError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = hasher(params.clone())
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| BankError::Credential(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// True iff `secret` is exactly the secret this credential was sealed from.
    pub fn verify(&self, secret: &str) -> bool {
        #[cfg(test)]
        VERIFICATIONS.with(|count| count.set(count.get() + 1));
        match PasswordHash::new(&self.0) {
            Ok(hash) => hasher(Params::default())
                .verify_password(secret.as_bytes(), &hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
thread_local! {
    static VERIFICATIONS: Cell<usize> = const { Cell::new(0) };
}

/// Number of [`Credential::verify`] calls made on this thread.
#[cfg(test)]
pub(crate) fn verifications() -> usize {
    VERIFICATIONS.with(Cell::get)
}

#[cfg(test)]
pub(crate) fn test_params() -> Params {
    Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_exact_secret_only() {
        let credential = Credential::seal("pw", &test_params()).unwrap();
        assert!(credential.verify("pw"));
        assert!(!credential.verify("bad"));
        assert!(!credential.verify("pw "));
        assert!(!credential.verify(""));
    }

    #[test]
    fn test_same_secret_gets_distinct_salts() {
        let a = Credential::seal("pw", &test_params()).unwrap();
        let b = Credential::seal("pw", &test_params()).unwrap();
        assert_ne!(a.0, b.0);
        assert!(a.verify("pw") && b.verify("pw"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::seal("hunter2", &test_params()).unwrap();
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("argon2"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_empty_secret_can_be_sealed() {
        let credential = Credential::seal("", &test_params()).unwrap();
        assert!(credential.verify(""));
        assert!(!credential.verify("x"));
    }
}
